//! Whole-document orchestration across the configured field list.

use crate::codec;
use crate::config::EncryptionConfig;
use crate::error::{ConfigError, ConfigResult, TransformResult};
use crate::state;
use fieldveil_crypto::FieldKey;
use fieldveil_model::Document;
use std::collections::BTreeSet;

/// Field-level encryption engine for one document type.
///
/// Holds the validated field list and the key material derived from the
/// configured secret. Immutable after construction and shareable across
/// threads; each method call operates on exactly one document, mutates it
/// in place and performs no I/O. Calls on different documents are fully
/// independent; callers must not run two calls on the *same* document
/// concurrently.
///
/// Derived [`Debug`] output stays safe to log: the contained [`FieldKey`]
/// redacts its own material.
#[derive(Debug)]
pub struct FieldEncryptor {
    fields: Vec<String>,
    key: FieldKey,
}

impl FieldEncryptor {
    /// Validates `config` and derives the cipher key.
    ///
    /// Fails with a [`ConfigError`] for an empty secret, an empty field
    /// list, an empty or duplicate field name, or a field name inside the
    /// reserved flag namespace.
    pub fn new(config: &EncryptionConfig) -> ConfigResult<Self> {
        if config.fields.is_empty() {
            return Err(ConfigError::EmptyFields);
        }
        let mut seen = BTreeSet::new();
        for field in &config.fields {
            if field.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if state::is_flag_field(field) {
                return Err(ConfigError::ReservedField(field.clone()));
            }
            if !seen.insert(field.as_str()) {
                return Err(ConfigError::DuplicateField(field.clone()));
            }
        }

        let key = FieldKey::derive(&config.secret).map_err(|_| ConfigError::InvalidSecret)?;

        Ok(FieldEncryptor {
            fields: config.fields.clone(),
            key,
        })
    }

    /// The configured field names, in configured order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Encrypts every configured field that is not already encrypted.
    ///
    /// Fields whose state flag is already `true` are skipped, which makes
    /// repeated calls idempotent. On error the call stops at the offending
    /// field: fields transformed earlier in the same call keep their new
    /// values and flags (no rollback), and the caller must abort the
    /// surrounding persist. Only the in-memory document is touched either
    /// way.
    pub fn encrypt_fields(&self, doc: &mut Document) -> TransformResult<()> {
        for field in &self.fields {
            if state::is_encrypted(doc, field) {
                continue;
            }
            codec::encrypt_field(doc, field, &self.key)?;
            state::set_encrypted(doc, field, true);
        }
        Ok(())
    }

    /// Decrypts every configured field that is currently encrypted.
    ///
    /// Fields whose state flag is `false` or absent are skipped no matter
    /// what their value holds: the flag is the only source of truth, so a
    /// plaintext that merely looks like hex is never touched. Same
    /// fail-fast, no-rollback contract as
    /// [`encrypt_fields`](Self::encrypt_fields); a field whose ciphertext
    /// is malformed keeps both its stored value and its flag.
    pub fn decrypt_fields(&self, doc: &mut Document) -> TransformResult<()> {
        for field in &self.fields {
            if !state::is_encrypted(doc, field) {
                continue;
            }
            codec::decrypt_field(doc, field, &self.key)?;
            state::set_encrypted(doc, field, false);
        }
        Ok(())
    }

    /// Removes the state flags for all configured fields.
    ///
    /// For cloning a decrypted document into a fresh record without
    /// carrying the bookkeeping fields along. Field values are untouched,
    /// so stripping flags from a still-encrypted document loses the only
    /// record of its state; decrypt first.
    pub fn strip_flags(&self, doc: &mut Document) {
        for field in &self.fields {
            state::clear_flag(doc, field);
        }
    }
}
