//! Error types for the cipher layer.

use thiserror::Error;

/// Errors from key derivation and the field cipher.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The secret was empty. Raised at setup, never mid-document.
    #[error("secret must not be empty")]
    InvalidSecret,
    /// Ciphertext failed hex decoding or did not decrypt to valid text.
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
