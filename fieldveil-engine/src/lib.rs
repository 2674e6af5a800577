//! Field-level encryption engine for open documents.
//!
//! Protects named string fields of a document in place: values are
//! encrypted before the host persists the document and decrypted after it
//! loads one, with a boolean state flag stored alongside each protected
//! field so repeated runs never double-encrypt or double-decrypt.
//!
//! # Architecture
//!
//! - [`FieldEncryptor`]: validated per-document-type engine, the field
//!   list plus derived key material, built once from an
//!   [`EncryptionConfig`] and reused for every document of that type
//! - state flags: reserved sibling fields (`__enc_<field>`), the only
//!   source of truth for per-field encryption state
//! - field codec: single-field transform behind a string-only type guard;
//!   non-string values fail the whole call instead of being skipped
//! - [`DocumentHooks`]: the before-persist / after-load seam the host
//!   wires into its own lifecycle; [`PassthroughHooks`] keeps call sites
//!   identical when protection is disabled
//!
//! The engine performs no I/O and keeps no state between calls beyond what
//! is written onto the document itself. A failed transform is an
//! instruction to the host to abort the surrounding operation.

mod codec;
mod config;
mod error;
mod hooks;
mod state;
mod transformer;

pub use codec::{decrypt_field, encrypt_field};
pub use config::EncryptionConfig;
pub use error::{ConfigError, ConfigResult, TransformError, TransformResult};
pub use hooks::{DocumentHooks, PassthroughHooks};
pub use state::{clear_flag, flag_name, is_encrypted, is_flag_field, set_encrypted, FLAG_PREFIX};
pub use transformer::FieldEncryptor;

// Re-exported so hosts need a single import to use the engine.
pub use fieldveil_crypto::{CryptoError, FieldKey};
pub use fieldveil_model::{Document, FieldKind, FieldValue};
