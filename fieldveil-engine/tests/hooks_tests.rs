//! Exercises the hook seam the way a host persistence layer would: a
//! JSON-file store whose save path runs `before_persist` and whose load
//! path runs `after_load`.

use fieldveil_engine::{
    Document, DocumentHooks, EncryptionConfig, FieldEncryptor, PassthroughHooks, TransformError,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const SECRET: &str = "letsdothis";
const CT_SOME_STUFF: &str = "b27d5768b82263ece8bd";

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_encryptor(fields: &[&str]) -> FieldEncryptor {
    FieldEncryptor::new(&EncryptionConfig::new(fields.iter().copied(), SECRET)).unwrap()
}

struct JsonFileStore {
    dir: tempfile::TempDir,
}

impl JsonFileStore {
    fn new() -> Self {
        JsonFileStore {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, id: &str) -> PathBuf {
        self.dir.path().join(format!("{id}.json"))
    }

    /// Host write path: hook first, persist after. A hook error aborts the
    /// write before anything reaches the disk.
    fn save(
        &self,
        hooks: &dyn DocumentHooks,
        id: &str,
        mut doc: Document,
    ) -> Result<(), TransformError> {
        hooks.before_persist(&mut doc)?;
        fs::write(self.path(id), serde_json::to_vec(&doc).unwrap()).unwrap();
        Ok(())
    }

    /// Host read path: load first, hook after.
    fn load(&self, hooks: &dyn DocumentHooks, id: &str) -> Result<Document, TransformError> {
        let bytes = fs::read(self.path(id)).unwrap();
        let mut doc: Document = serde_json::from_slice(&bytes).unwrap();
        hooks.after_load(&mut doc)?;
        Ok(doc)
    }

    /// The persisted bytes as raw JSON, bypassing the hooks.
    fn raw(&self, id: &str) -> serde_json::Value {
        serde_json::from_slice(&fs::read(self.path(id)).unwrap()).unwrap()
    }

    fn exists(&self, id: &str) -> bool {
        self.path(id).exists()
    }
}

#[test]
fn save_and_load_roundtrip_through_encryption() {
    init_tracing();
    let store = JsonFileStore::new();
    let encryptor = test_encryptor(&["card_number"]);

    let mut doc = Document::new();
    doc.set("card_number", "4111 1111 1111 1111");
    doc.set("holder", "alice");
    store.save(&encryptor, "payment-1", doc).unwrap();

    let loaded = store.load(&encryptor, "payment-1").unwrap();
    assert_eq!(loaded.get_str("card_number"), Some("4111 1111 1111 1111"));
    assert_eq!(loaded.get_str("holder"), Some("alice"));
    assert_eq!(loaded.get_bool("__enc_card_number"), Some(false));
}

#[test]
fn persisted_form_is_ciphertext_with_raised_flag() {
    let store = JsonFileStore::new();
    let encryptor = test_encryptor(&["note"]);

    let mut doc = Document::new();
    doc.set("note", "some stuff");
    store.save(&encryptor, "note-1", doc).unwrap();

    // What actually sits on disk: hex ciphertext, flag, untouched siblings
    let raw = store.raw("note-1");
    assert_eq!(raw, json!({"note": CT_SOME_STUFF, "__enc_note": true}));
}

#[test]
fn failed_transform_aborts_the_write() {
    let store = JsonFileStore::new();
    let encryptor = test_encryptor(&["amount"]);

    let mut doc = Document::new();
    doc.set("amount", json!(125.50));
    let result = store.save(&encryptor, "order-1", doc);

    assert!(matches!(
        result,
        Err(TransformError::UnsupportedFieldType { .. })
    ));
    assert!(!store.exists("order-1"));
}

#[test]
fn passthrough_hooks_persist_plaintext() {
    let store = JsonFileStore::new();

    let mut doc = Document::new();
    doc.set("note", "visible on disk");
    store.save(&PassthroughHooks, "plain-1", doc).unwrap();

    assert_eq!(store.raw("plain-1"), json!({"note": "visible on disk"}));

    let loaded = store.load(&PassthroughHooks, "plain-1").unwrap();
    assert_eq!(loaded.get_str("note"), Some("visible on disk"));
}

#[test]
fn hooks_work_behind_a_shared_trait_object() {
    init_tracing();
    let store = JsonFileStore::new();
    let hooks: Arc<dyn DocumentHooks> = Arc::new(test_encryptor(&["note"]));

    let mut doc = Document::new();
    doc.set("note", "shared engine");
    store.save(hooks.as_ref(), "shared-1", doc).unwrap();

    let loaded = store.load(hooks.as_ref(), "shared-1").unwrap();
    assert_eq!(loaded.get_str("note"), Some("shared engine"));
}

#[test]
fn documents_written_by_the_original_scheme_load_cleanly() {
    let store = JsonFileStore::new();
    let encryptor = test_encryptor(&["note"]);

    // Bytes exactly as the original scheme persisted them
    let legacy = json!({"note": CT_SOME_STUFF, "__enc_note": true});
    fs::write(store.path("legacy-1"), serde_json::to_vec(&legacy).unwrap()).unwrap();

    let loaded = store.load(&encryptor, "legacy-1").unwrap();
    assert_eq!(loaded.get_str("note"), Some("some stuff"));
}

#[test]
fn repeated_save_load_cycles_are_stable() {
    let store = JsonFileStore::new();
    let encryptor = test_encryptor(&["secret_field"]);

    let mut doc = Document::new();
    doc.set("secret_field", "stable value");

    for cycle in 0..3 {
        store.save(&encryptor, "cycled", doc).unwrap();
        doc = store.load(&encryptor, "cycled").unwrap();
        assert_eq!(
            doc.get_str("secret_field"),
            Some("stable value"),
            "cycle {cycle} lost the value"
        );
    }
}
