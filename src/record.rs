//! The record handed back by a document parser.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely structured mapping from field name to extracted value.
///
/// The wrapper treats the contents as opaque: whatever the parser put in is
/// exactly what gets serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedResumeRecord(Map<String, Value>);

impl ExtractedResumeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Compact JSON, no indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Map<String, Value>> for ExtractedResumeRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ExtractedResumeRecord> for Value {
    fn from(record: ExtractedResumeRecord) -> Self {
        Value::Object(record.0)
    }
}
