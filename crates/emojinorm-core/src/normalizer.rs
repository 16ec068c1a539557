//! Normalizer — rewrites the `"e"` field of every [`Record`] in a [`Document`].
//!
//! Two independent transforms are provided: [`deduplicate`] drops repeated
//! sequence elements keeping first occurrences, and [`normalize_case`]
//! lowercases string content. Both are total: every record shape either
//! matches a case or passes through unchanged, so neither can fail once the
//! document has parsed.

use std::collections::HashSet;

use serde_json::{Number, Value};

use crate::types::{Document, FieldShape, Mode, Record};

/// Counters gathered during a single transform pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Records visited (always the document length).
    pub records: usize,
    /// Records whose `"e"` value changed.
    pub records_changed: usize,
    /// Duplicate sequence elements dropped (dedup mode).
    pub duplicates_removed: usize,
    /// String values whose lowercase form differed (normalize mode).
    pub strings_lowercased: usize,
}

impl Mode {
    /// Run this mode's transform over `document`.
    pub fn apply(self, document: &mut Document) -> TransformStats {
        match self {
            Mode::Dedup => deduplicate(document),
            Mode::Normalize => normalize_case(document),
        }
    }
}

// ---------------------------------------------------------------------------
// Dedup
// ---------------------------------------------------------------------------

/// Remove duplicate elements from every sequence-valued `"e"`, keeping the
/// first occurrence of each. Equality is exact: `"a"` and `"A"` are distinct.
pub fn deduplicate(document: &mut Document) -> TransformStats {
    let mut stats = TransformStats {
        records: document.len(),
        ..TransformStats::default()
    };
    for record in document.records_mut() {
        let removed = deduplicate_record(record);
        if removed > 0 {
            stats.records_changed += 1;
            stats.duplicates_removed += removed;
        }
    }
    stats
}

/// Dedup a single record in place. Returns the number of elements dropped.
pub fn deduplicate_record(record: &mut Record) -> usize {
    match FieldShape::of(record) {
        FieldShape::Sequence(items) => dedup_values(items),
        FieldShape::Absent | FieldShape::Text(_) | FieldShape::Other(_) => 0,
    }
}

fn dedup_values(items: &mut Vec<Value>) -> usize {
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(canonical_key(item)));
    before - items.len()
}

/// Canonical text of a JSON value used as its dedup identity.
///
/// Compact JSON with object keys sorted, so two objects holding the same
/// pairs in a different order compare equal. Numbers compare by value, so
/// `1`, `1.0` and `10e-1` share a key while `true` and `"1"` keep their own.
pub fn canonical_key(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // String keys serialize infallibly.
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        Value::Number(number) => write_number(number, out),
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_number(number: &Number, out: &mut String) {
    let text = number.to_string();
    match decimal_key(&text) {
        Some(key) => out.push_str(&key),
        None => out.push_str(&text),
    }
}

/// Exact `<digits>e<exponent>` form of a JSON number literal with leading and
/// trailing zeros stripped. Every zero, `-0` included, reduces to `0`.
/// `None` only when the exponent leaves the `i64` range.
fn decimal_key(text: &str) -> Option<String> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = format!("{whole}{fraction}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some("0".to_owned());
    }
    let trimmed = significant.trim_end_matches('0');
    let exponent = exponent
        .checked_sub(i64::try_from(fraction.len()).ok()?)?
        .checked_add(i64::try_from(significant.len() - trimmed.len()).ok()?)?;
    Some(format!("{sign}{trimmed}e{exponent}"))
}

// ---------------------------------------------------------------------------
// Case normalisation
// ---------------------------------------------------------------------------

/// Lowercase a string-valued `"e"`, or every string element of a
/// sequence-valued `"e"`. Non-string elements keep their position.
pub fn normalize_case(document: &mut Document) -> TransformStats {
    let mut stats = TransformStats {
        records: document.len(),
        ..TransformStats::default()
    };
    for record in document.records_mut() {
        let lowered = normalize_record(record);
        if lowered > 0 {
            stats.records_changed += 1;
            stats.strings_lowercased += lowered;
        }
    }
    stats
}

/// Lowercase a single record in place. Returns how many strings changed.
pub fn normalize_record(record: &mut Record) -> usize {
    match FieldShape::of(record) {
        FieldShape::Text(text) => usize::from(lowercase_in_place(text)),
        FieldShape::Sequence(items) => items
            .iter_mut()
            .filter_map(|item| match item {
                Value::String(text) => Some(lowercase_in_place(text)),
                _ => None,
            })
            .filter(|changed| *changed)
            .count(),
        FieldShape::Absent | FieldShape::Other(_) => 0,
    }
}

fn lowercase_in_place(text: &mut String) -> bool {
    let lowered = text.to_lowercase();
    if lowered == *text {
        return false;
    }
    *text = lowered;
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
