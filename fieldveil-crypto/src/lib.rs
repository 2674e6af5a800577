//! Deterministic field cipher for fieldveil.
//!
//! Encrypts individual field values with AES-256-CTR under key material
//! stretched from a caller-supplied secret:
//! - the `EVP_BytesToKey` construction (MD5 digest, no salt, one round)
//!   turns the secret into a 32-byte key and a 16-byte initial counter block
//! - the counter block is derived, not random, so a fixed secret and fixed
//!   plaintext always produce byte-identical ciphertext
//! - the wire form is lowercase hex of the raw keystream output, two
//!   characters per plaintext byte
//!
//! # Determinism is the contract
//!
//! Callers rely on stable ciphertext: the engine's idempotence checks and
//! data written by the original scheme both depend on it. The trade-off is
//! no semantic security (equal plaintexts are visible as equal ciphertexts
//! under one secret) and no integrity tag. This layer hides field values;
//! it does not authenticate them.

mod cipher;
mod error;
mod key;

pub use cipher::{decrypt, decrypt_bytes, decrypt_string, encrypt, encrypt_bytes, encrypt_string};
pub use error::{CryptoError, CryptoResult};
pub use key::{FieldKey, BLOCK_SIZE, KEY_SIZE};
