//! Single-field encrypt/decrypt behind the string-only type guard.

use crate::error::{TransformError, TransformResult};
use fieldveil_crypto::{decrypt_string, encrypt_string, FieldKey};
use fieldveil_model::{Document, FieldKind, FieldValue};

/// Reads `field` as a string, or reports the shape that was found.
fn string_value<'a>(doc: &'a Document, field: &str) -> TransformResult<&'a str> {
    match doc.get(field) {
        Some(FieldValue::String(s)) => Ok(s),
        Some(other) => Err(TransformError::UnsupportedFieldType {
            field: field.to_owned(),
            kind: other.kind(),
        }),
        None => Err(TransformError::UnsupportedFieldType {
            field: field.to_owned(),
            kind: FieldKind::Missing,
        }),
    }
}

/// Encrypts `field` in place, replacing its value with the hex wire form.
///
/// Only string values are eligible. Anything else, including an absent
/// field, is an error rather than a silent skip: skipping would leave a
/// field configured as sensitive unprotected with no signal to the caller.
pub fn encrypt_field(doc: &mut Document, field: &str, key: &FieldKey) -> TransformResult<()> {
    let ciphertext = encrypt_string(key, string_value(doc, field)?);
    doc.set(field, ciphertext);
    Ok(())
}

/// Decrypts `field` in place, replacing the wire form with the plaintext.
///
/// The same type guard applies. On a cipher failure the field keeps its
/// stored value, so malformed ciphertext can be inspected afterwards.
pub fn decrypt_field(doc: &mut Document, field: &str, key: &FieldKey) -> TransformResult<()> {
    let plaintext = decrypt_string(key, string_value(doc, field)?)?;
    doc.set(field, plaintext);
    Ok(())
}
