//! Open document mapping, mutated in place by the encryption engine.

use crate::error::DocumentError;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An open mapping from field name to value.
///
/// The engine never owns a document's lifetime: the host framework builds
/// one (usually from its native record type), hands it over for in-place
/// mutation, and persists it afterwards. Reserved state-flag fields live in
/// the same mapping as application fields, so they travel with the document
/// through serialization without any side table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns the value of `field` as a string slice, if present and textual.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_str)
    }

    /// Returns the value of `field` as a boolean, if present and boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.fields.get(field).and_then(FieldValue::as_bool)
    }

    /// Sets `field` to `value`, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes `field`, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Whether `field` is present.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields, reserved flags included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates field names in name order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Document { fields }
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = DocumentError;

    /// Builds a document from a JSON object; any other shape is rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => {
                let fields = map
                    .into_iter()
                    .map(|(name, value)| (name, FieldValue::from(value)))
                    .collect();
                Ok(Document { fields })
            }
            other => Err(DocumentError::NotAnObject(FieldValue::from(other).kind())),
        }
    }
}

impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        let map = doc
            .fields
            .into_iter()
            .map(|(name, value)| (name, serde_json::Value::from(value)))
            .collect();
        serde_json::Value::Object(map)
    }
}
