//! Core types for emojinorm-core.
//!
//! This module defines the document model shared by every layer: the ordered
//! [`Document`] of [`Record`]s, the [`FieldShape`] view over a record's `"e"`
//! slot, and the transform [`Mode`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the only field the transforms ever touch.
pub const FIELD: &str = "e";

/// One JSON object from the top-level input array (a single emoji entry).
///
/// Backed by serde_json's insertion-ordered map, so keys are written back in
/// the order they were read.
pub type Record = serde_json::Map<String, Value>;

/// The full ordered array of [`Record`]s loaded from, and written to, JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a document from JSON text.
    ///
    /// Fails unless the top-level value is an array whose every element is an
    /// object.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Parse a document from raw bytes. Invalid UTF-8 is a parse error.
    pub fn from_json_slice(input: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(input)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}

/// Tagged view over the `"e"` slot of a single record.
///
/// The transforms match on this exhaustively instead of probing the JSON
/// value's type ad hoc; [`FieldShape::Other`] covers numbers, booleans,
/// objects and `null`, all of which pass through untouched.
#[derive(Debug)]
pub enum FieldShape<'a> {
    Absent,
    Text(&'a mut String),
    Sequence(&'a mut Vec<Value>),
    Other(&'a mut Value),
}

impl<'a> FieldShape<'a> {
    pub fn of(record: &'a mut Record) -> Self {
        match record.get_mut(FIELD) {
            None => FieldShape::Absent,
            Some(Value::String(text)) => FieldShape::Text(text),
            Some(Value::Array(items)) => FieldShape::Sequence(items),
            Some(other) => FieldShape::Other(other),
        }
    }
}

/// Which transform a run applies.
///
/// Config files and environment variables go through the same [`FromStr`]
/// parser as the command line, so names and aliases match case-insensitively
/// everywhere.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    /// Drop repeated elements from a sequence-valued `"e"`.
    Dedup,
    /// Lowercase string content of `"e"`, scalar or sequence.
    Normalize,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Dedup => "dedup",
            Mode::Normalize => "normalize",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?} (expected dedup or normalize)")]
pub struct ParseModeError(pub String);

impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dedup" | "dedupe" | "deduplicate" => Ok(Mode::Dedup),
            "normalize" | "lowercase" => Ok(Mode::Normalize),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ParseModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
