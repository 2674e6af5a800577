//! Host-supplied protection options.

use std::fmt;

/// Options supplied once at document-type-definition time: which fields to
/// protect and the secret the cipher key is derived from.
///
/// Construction is infallible; validation happens when the options are
/// turned into a [`FieldEncryptor`](crate::FieldEncryptor), so setup
/// mistakes surface exactly once, at setup.
#[derive(Clone)]
pub struct EncryptionConfig {
    pub(crate) fields: Vec<String>,
    pub(crate) secret: String,
}

impl EncryptionConfig {
    /// Builds options from any iterable of field names and a secret.
    pub fn new<I, S>(fields: I, secret: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EncryptionConfig {
            fields: fields.into_iter().map(Into::into).collect(),
            secret: secret.into(),
        }
    }

    /// The configured field names, in configured order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

// The secret must stay out of Debug output.
impl fmt::Debug for EncryptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionConfig")
            .field("fields", &self.fields)
            .field("secret", &"<redacted>")
            .finish()
    }
}
