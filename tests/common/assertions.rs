//! Domain-specific assertion helpers for emojinorm harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record invariant was violated.

use emojinorm_core::{Document, FIELD};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that record `index` of a document has `"e"` equal to a JSON literal.
///
/// ```rust
/// assert_e!(doc, 0, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_e {
    ($doc:expr, $index:expr, $value:tt) => {{
        let doc: &emojinorm_core::Document = &$doc;
        let index: usize = $index;
        let expected = serde_json::json!($value);
        match doc.records()[index].get(emojinorm_core::FIELD) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_e! failed:\n  record[{}].e\n  expected: {}\n  actual:   {}",
                index, expected, actual
            ),
            None => panic!(
                "assert_e! failed: record[{}] has no \"e\" field.\n  record: {:?}",
                index,
                doc.records()[index]
            ),
        }
    }};
}

/// Assert that no element of a sequence-valued `"e"` appears twice.
#[macro_export]
macro_rules! assert_no_duplicates {
    ($doc:expr) => {{
        let doc: &emojinorm_core::Document = &$doc;
        for (i, record) in doc.records().iter().enumerate() {
            if let Some(serde_json::Value::Array(items)) = record.get(emojinorm_core::FIELD) {
                for (a, left) in items.iter().enumerate() {
                    for right in &items[a + 1..] {
                        if left == right {
                            panic!(
                                "assert_no_duplicates! failed: record[{}].e repeats {}",
                                i, left
                            );
                        }
                    }
                }
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Document invariant helpers
// ---------------------------------------------------------------------------

/// Assert that `after` differs from `before` at most in each record's `"e"`
/// value: same length, same record order, same keys in the same order, and
/// identical values for every key other than `"e"`.
pub fn assert_only_e_changed(before: &Document, after: &Document) {
    assert_eq!(
        before.len(),
        after.len(),
        "transform changed the document length"
    );
    for (i, (old, new)) in before.records().iter().zip(after.records()).enumerate() {
        let old_keys: Vec<&String> = old.keys().collect();
        let new_keys: Vec<&String> = new.keys().collect();
        assert_eq!(old_keys, new_keys, "record[{i}] key order changed");
        for (key, value) in old {
            if key != FIELD {
                assert_eq!(Some(value), new.get(key), "record[{i}].{key} was modified");
            }
        }
    }
}
