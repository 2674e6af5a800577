//! Document model for fieldveil.
//!
//! Documents are open, dynamically shaped mappings owned by the host
//! framework: the engine receives one, mutates the fields it is configured
//! to protect, and hands it back. Values stay tagged ([`FieldValue`]) so the
//! encryption layer can guard on types at the boundary instead of
//! duck-typing, while serialization remains transparent: a document
//! round-trips through the host's native JSON shape unchanged, reserved
//! state-flag fields included.

mod document;
mod error;
mod value;

pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use value::{FieldKind, FieldValue};
