//! Per-field encryption state, stored as reserved sibling flags.
//!
//! State lives on the document itself, not in a side table: the flag for
//! field `x` is a boolean field named `__enc_x` in the same mapping. It
//! serializes with the document, so any load path can read it knowing only
//! the naming convention.

use fieldveil_model::Document;

/// Reserved prefix for encryption-state flag fields.
///
/// Matches the convention of the original scheme, so documents it wrote
/// read back without migration.
pub const FLAG_PREFIX: &str = "__enc_";

/// Name of the state flag for `field`.
pub fn flag_name(field: &str) -> String {
    format!("{FLAG_PREFIX}{field}")
}

/// Whether `name` is in the reserved state-flag namespace.
pub fn is_flag_field(name: &str) -> bool {
    name.starts_with(FLAG_PREFIX)
}

/// Reads the state flag for `field`.
///
/// Absent flags and non-boolean flag values both read as "not encrypted";
/// only a boolean `true` marks a field encrypted.
pub fn is_encrypted(doc: &Document, field: &str) -> bool {
    doc.get_bool(&flag_name(field)).unwrap_or(false)
}

/// Writes the state flag for `field`.
pub fn set_encrypted(doc: &mut Document, field: &str, encrypted: bool) {
    doc.set(flag_name(field), encrypted);
}

/// Removes the state flag for `field`, returning whether it was present.
pub fn clear_flag(doc: &mut Document, field: &str) -> bool {
    doc.remove(&flag_name(field)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_names_use_reserved_prefix() {
        assert_eq!(flag_name("email"), "__enc_email");
        assert!(is_flag_field("__enc_email"));
        assert!(!is_flag_field("email"));
    }

    #[test]
    fn absent_flag_reads_as_plaintext() {
        let doc = Document::new();
        assert!(!is_encrypted(&doc, "email"));
    }

    #[test]
    fn set_and_clear_flag() {
        let mut doc = Document::new();
        set_encrypted(&mut doc, "email", true);
        assert!(is_encrypted(&doc, "email"));
        assert_eq!(doc.get_bool("__enc_email"), Some(true));

        set_encrypted(&mut doc, "email", false);
        assert!(!is_encrypted(&doc, "email"));

        assert!(clear_flag(&mut doc, "email"));
        assert!(!doc.contains("__enc_email"));
        assert!(!clear_flag(&mut doc, "email"));
    }

    #[test]
    fn non_boolean_flag_reads_as_plaintext() {
        let mut doc = Document::new();
        doc.set("__enc_email", "yes");
        assert!(!is_encrypted(&doc, "email"));
    }
}
