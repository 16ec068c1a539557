//! Static emoji-record corpora used across harnesses.
//!
//! Each corpus is a JSON document in the shape the tool reads: a top-level
//! array of objects, with `"e"` holding search keywords.

use fake::faker::lorem::en::Word;
use fake::Fake;
use serde_json::{json, Value};

/// A small slice of a real search index: keyword lists with repeats and
/// mixed case, a scalar keyword, and records without `"e"`.
pub fn corpus_search_index() -> Value {
    json!([
        {"n": "grinning face", "u": "1f600", "e": ["Smile", "happy", "smile", "Grin", "happy"]},
        {"n": "red heart", "u": "2764-fe0f", "e": ["LOVE", "heart", "Love", "heart"]},
        {"n": "thumbs up", "u": "1f44d", "e": "Approve"},
        {"n": "flag: Japan", "u": "1f1ef-1f1f5", "c": "flags"},
        {"n": "keycap: 1", "u": "0031-fe0f-20e3", "e": ["one", 1, "ONE", 1, null]},
        {"n": "party popper", "u": "1f389", "e": []}
    ])
}

/// Records whose `"e"` must pass through both transforms untouched.
pub fn corpus_passthrough() -> Value {
    json!([
        {"n": "no keywords"},
        {"e": 42},
        {"e": true},
        {"e": null},
        {"e": {"nested": ["A", "A"]}},
        {"e": 1.5, "x": "UPPER"}
    ])
}

/// Bytes that must be rejected as malformed input.
pub const MALFORMED_INPUTS: &[&str] = &[
    "",
    "not json at all",
    "[{\"e\": [\"a\",]}",
    "{\"e\": \"object at top level\"}",
    "[1, 2, 3]",
    "[{\"e\": \"a\"}, \"stray string\"]",
    "\"just a string\"",
];

/// Generate `n` records with random keyword lists, roughly a third of them
/// carrying duplicates and upper-case keywords.
pub fn corpus_high_volume(n: usize) -> Value {
    let records: Vec<Value> = (0..n)
        .map(|i| {
            let mut words: Vec<Value> = (0..6)
                .map(|_| Value::String(Word().fake::<String>()))
                .collect();
            if i % 3 == 0 {
                let first = words[0].clone();
                words.push(first);
                words.push(Value::String(format!("KEYWORD{}", i % 7)));
            }
            json!({"n": format!("emoji {i}"), "u": format!("{:x}", 0x1f600 + i), "e": words})
        })
        .collect();
    Value::Array(records)
}
