//! Filter-and-retain step

use super::rules::rules_for;
use crate::endpoint::EntityKind;
use crate::types::{JsonValue, Record};

/// Apply every rule for `kind` to a record, in place.
///
/// The filtered field is removed whenever it is present, null or not.
/// Applying this twice is the same as applying it once.
pub fn filter_record(kind: EntityKind, record: &mut Record) {
    for rule in rules_for(kind) {
        let Some(value) = record.shift_remove(rule.filtered_field) else {
            continue;
        };

        let Some(retained) = rule.retained_subfields else {
            continue;
        };

        if let JsonValue::Object(nested) = value {
            for subfield in retained {
                if let Some(sub_value) = nested.get(*subfield) {
                    record.insert(
                        format!("{}_{subfield}", rule.filtered_field),
                        sub_value.clone(),
                    );
                }
            }
        }
    }
}

/// Apply [`filter_record`] to a batch of records
pub fn filter_records(kind: EntityKind, records: &mut [Record]) {
    for record in records {
        filter_record(kind, record);
    }
}
