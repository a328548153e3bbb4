//! Sequential id assignment.

use crate::record::Record;

/// Overwrite every record's id with its 1-based position.
///
/// Safe to rerun on already-tagged data; ids are replaced, never
/// incremented. Classification fields are left untouched.
pub fn assign_metadata(records: &mut [Record]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.id = index as u32 + 1;
    }
}
