//! Newline-delimited JSON serialization

use crate::error::Result;
use crate::normalize::flatten;
use crate::types::Record;

/// Flatten and serialize one record to a single JSON line (no newline)
pub fn serialize_record(record: &Record) -> Result<String> {
    Ok(serde_json::to_string(&flatten(record))?)
}

/// Flatten every record and join them with `\n`.
///
/// No trailing newline; no records gives an empty string.
pub fn serialize(records: &[Record]) -> Result<String> {
    let lines = records
        .iter()
        .map(serialize_record)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
