//! Error types for configuration and document transformation.

use fieldveil_crypto::CryptoError;
use fieldveil_model::FieldKind;
use thiserror::Error;

/// Configuration errors, raised once at setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The secret was missing or empty.
    #[error("secret must not be empty")]
    InvalidSecret,
    /// The field list was empty.
    #[error("field list must not be empty")]
    EmptyFields,
    /// A configured field name was the empty string.
    #[error("field names must not be empty")]
    EmptyFieldName,
    /// The same field name was configured twice.
    #[error("duplicate field in config: {0}")]
    DuplicateField(String),
    /// A configured field name would collide with the reserved flag
    /// namespace.
    #[error("field name uses the reserved flag prefix: {0}")]
    ReservedField(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Runtime errors from document transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A configured field held a non-string value, or no value at all.
    #[error("field {field:?} is {kind}, only string fields can be protected")]
    UnsupportedFieldType { field: String, kind: FieldKind },
    /// The cipher rejected the stored data.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type TransformResult<T> = Result<T, TransformError>;
