//! AES-256-CTR keystream and the hex wire codec.

use crate::error::{CryptoError, CryptoResult};
use crate::key::FieldKey;
use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;

// Big-endian 128-bit counter, matching the original scheme's CTR variant.
type Aes256Ctr = Ctr128BE<Aes256>;

/// CTR encryption and decryption are the same keystream XOR, so one routine
/// covers both directions.
fn apply_keystream(key: &FieldKey, data: &[u8]) -> Vec<u8> {
    let mut cipher = Aes256Ctr::new(key.key().into(), key.counter_block().into());
    let mut out = data.to_vec();
    cipher.apply_keystream(&mut out);
    out
}

/// Encrypts raw bytes, returning cipher output of the same length.
pub fn encrypt_bytes(key: &FieldKey, plaintext: &[u8]) -> Vec<u8> {
    apply_keystream(key, plaintext)
}

/// Decrypts raw cipher bytes previously produced under the same key.
pub fn decrypt_bytes(key: &FieldKey, ciphertext: &[u8]) -> Vec<u8> {
    apply_keystream(key, ciphertext)
}

/// Encrypts a field value to its wire form: lowercase hex of the cipher
/// output, two characters per plaintext byte.
pub fn encrypt_string(key: &FieldKey, plaintext: &str) -> String {
    hex::encode(encrypt_bytes(key, plaintext.as_bytes()))
}

/// Decrypts a wire-form value back to the plaintext string.
///
/// Fails with [`CryptoError::MalformedCiphertext`] when the input is not
/// valid hex, or when the decrypted bytes are not valid UTF-8 (wrong secret
/// or tampered data). The caller's value is untouched on failure.
pub fn decrypt_string(key: &FieldKey, ciphertext: &str) -> CryptoResult<String> {
    let raw = hex::decode(ciphertext)
        .map_err(|e| CryptoError::MalformedCiphertext(format!("invalid hex: {e}")))?;
    let plaintext = decrypt_bytes(key, &raw);
    String::from_utf8(plaintext).map_err(|_| {
        CryptoError::MalformedCiphertext(
            "decrypted bytes are not valid utf-8 (wrong secret or tampered data)".to_string(),
        )
    })
}

/// One-shot form of [`encrypt_string`], deriving the key from `secret`.
///
/// Prefer [`FieldKey::derive`] plus [`encrypt_string`] when encrypting more
/// than one value under the same secret.
pub fn encrypt(secret: &str, plaintext: &str) -> CryptoResult<String> {
    let key = FieldKey::derive(secret)?;
    Ok(encrypt_string(&key, plaintext))
}

/// One-shot form of [`decrypt_string`], deriving the key from `secret`.
pub fn decrypt(secret: &str, ciphertext: &str) -> CryptoResult<String> {
    let key = FieldKey::derive(secret)?;
    decrypt_string(&key, ciphertext)
}
