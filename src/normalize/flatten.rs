//! Flattening of nested JSON into a single-level map

use crate::types::{JsonValue, NormalizedRecord, Record};

/// Separator between path segments in flattened keys
pub const DEFAULT_SEPARATOR: &str = "_";

/// Flatten a record with the default `_` separator
pub fn flatten(record: &Record) -> NormalizedRecord {
    flatten_with_separator(record, DEFAULT_SEPARATOR)
}

/// Flatten a record, joining path segments with `separator`.
///
/// Array elements are keyed by position. Empty objects and arrays have no
/// leaves, so they are kept as their own (empty) value under their path.
pub fn flatten_with_separator(record: &Record, separator: &str) -> NormalizedRecord {
    let mut out = NormalizedRecord::new();
    for (key, value) in record {
        flatten_into(&mut out, key.clone(), value, separator);
    }
    out
}

fn flatten_into(out: &mut NormalizedRecord, path: String, value: &JsonValue, separator: &str) {
    match value {
        JsonValue::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(out, format!("{path}{separator}{key}"), child, separator);
            }
        }
        JsonValue::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, format!("{path}{separator}{index}"), child, separator);
            }
        }
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}
