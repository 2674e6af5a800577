//! Secret stretching into cipher key material.

use crate::error::{CryptoError, CryptoResult};
use md5::{Digest, Md5};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;
/// AES block length in bytes; also the size of the initial counter block.
pub const BLOCK_SIZE: usize = 16;

/// Key material derived from a secret: the AES-256 key plus the initial
/// counter block for CTR mode.
///
/// Both halves are functions of the secret alone, which is what makes the
/// cipher deterministic end to end. Derive once at setup and reuse; the
/// material is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FieldKey {
    key: [u8; KEY_SIZE],
    counter_block: [u8; BLOCK_SIZE],
}

impl FieldKey {
    /// Derives key material from `secret`.
    ///
    /// Uses the OpenSSL `EVP_BytesToKey` construction with MD5, no salt and
    /// a single round: `D1 = MD5(secret)`, `Dn = MD5(D(n-1) || secret)`;
    /// `D1 || D2` supplies the key and `D3` the counter block. Kept for
    /// compatibility with ciphertext produced by the original scheme.
    ///
    /// Fails with [`CryptoError::InvalidSecret`] if the secret is empty.
    pub fn derive(secret: &str) -> CryptoResult<Self> {
        if secret.is_empty() {
            return Err(CryptoError::InvalidSecret);
        }

        let mut d1: [u8; 16] = Md5::digest(secret.as_bytes()).into();

        let mut hasher = Md5::new();
        hasher.update(d1);
        hasher.update(secret.as_bytes());
        let mut d2: [u8; 16] = hasher.finalize().into();

        let mut hasher = Md5::new();
        hasher.update(d2);
        hasher.update(secret.as_bytes());
        let d3: [u8; 16] = hasher.finalize().into();

        let mut key = [0u8; KEY_SIZE];
        key[..16].copy_from_slice(&d1);
        key[16..].copy_from_slice(&d2);
        d1.zeroize();
        d2.zeroize();

        Ok(FieldKey {
            key,
            counter_block: d3,
        })
    }

    pub(crate) fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    pub(crate) fn counter_block(&self) -> &[u8; BLOCK_SIZE] {
        &self.counter_block
    }
}

// Key material must stay out of Debug output.
impl fmt::Debug for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldKey").finish_non_exhaustive()
    }
}
