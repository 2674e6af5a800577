//! Error types for the document model.

use crate::value::FieldKind;
use thiserror::Error;

/// Errors from document construction.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON bridge requires a top-level object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(FieldKind),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
