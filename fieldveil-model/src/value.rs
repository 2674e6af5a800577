//! Tagged field values and their shape names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value in a [`Document`](crate::Document).
///
/// Serialization is untagged: strings, booleans, and everything else use
/// their plain JSON forms, so documents written by this crate are readable
/// by any consumer of the host's persistence format and vice versa.
///
/// Variant order matters for deserialization: strings and booleans are
/// tried before the catch-all, so they always land in their own variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual value. The only kind eligible for encryption.
    String(String),
    /// Boolean value. The reserved encryption-state flags use this.
    Bool(bool),
    /// Any other JSON shape (numbers, arrays, objects, null).
    Other(serde_json::Value),
}

impl FieldValue {
    /// Returns the string contents, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean contents, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The shape of this value, for error reporting.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Other(value) => match value {
                serde_json::Value::Null => FieldKind::Null,
                serde_json::Value::Number(_) => FieldKind::Number,
                serde_json::Value::Array(_) => FieldKind::Array,
                serde_json::Value::Object(_) => FieldKind::Object,
                // Normally lifted into their own variants on construction.
                serde_json::Value::String(_) => FieldKind::String,
                serde_json::Value::Bool(_) => FieldKind::Bool,
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    /// Lifts strings and booleans into their tagged variants; everything
    /// else stays as raw JSON.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            other => FieldValue::Other(other),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => serde_json::Value::String(s),
            FieldValue::Bool(b) => serde_json::Value::Bool(b),
            FieldValue::Other(v) => v,
        }
    }
}

/// The shape of a field value, as reported in type-guard errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
    Number,
    Array,
    Object,
    Null,
    /// The field is not present on the document at all.
    Missing,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Bool => "boolean",
            FieldKind::Number => "number",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::Null => "null",
            FieldKind::Missing => "missing",
        };
        f.write_str(name)
    }
}
