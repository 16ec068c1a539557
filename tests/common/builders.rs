//! Test builders — ergonomic constructors for `Record` and `Document`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use emojinorm_core::{Document, Record, FIELD};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("n", "grinning face")
///     .keywords(["Smile", "smile"])
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    map: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Set `"e"` to a list of keywords.
    pub fn keywords<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<Value> = words.into_iter().map(|w| Value::String(w.into())).collect();
        self.field(FIELD, list)
    }

    /// Set `"e"` to an arbitrary value.
    pub fn e(self, value: impl Into<Value>) -> Self {
        self.field(FIELD, value)
    }

    pub fn build(self) -> Record {
        self.map
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Parse a `json!` array into a [`Document`].
pub fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("fixture must be an array of objects")
}

/// Build a document from records.
pub fn document_of(records: impl IntoIterator<Item = Record>) -> Document {
    Document::new(records.into_iter().collect())
}

/// The `"e"` value of record `index`, if present.
pub fn e_of(document: &Document, index: usize) -> Option<&Value> {
    document.records()[index].get(FIELD)
}
