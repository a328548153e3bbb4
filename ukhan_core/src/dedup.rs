//! Deduplication and record-set merging.
//!
//! Both the single-file pipeline and the cross-file merge key on the same
//! canonical form of the riddle text: lowercased with all whitespace
//! removed. First occurrence wins and input order is preserved.

use std::collections::HashSet;

use crate::metadata::assign_metadata;
use crate::record::Record;

/// Canonical duplicate-detection key for a riddle.
#[must_use]
pub fn normalized_key(riddle: &str) -> String {
    riddle
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Collapse records with equal canonical riddle keys.
///
/// Records whose key is empty carry no usable riddle text and are dropped
/// outright.
#[must_use]
pub fn dedup(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let key = normalized_key(&record.riddle);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Result of merging several record sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Deduplicated union with freshly assigned ids.
    pub records: Vec<Record>,
    /// Record count across all inputs before deduplication.
    pub total: usize,
}

/// Union several record sets, dedup them and reassign ids from 1.
#[must_use]
pub fn merge(batches: Vec<Vec<Record>>) -> MergeOutcome {
    let total = batches.iter().map(Vec::len).sum();
    let mut records = dedup(batches.into_iter().flatten().collect());
    assign_metadata(&mut records);
    MergeOutcome { records, total }
}
