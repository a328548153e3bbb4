//! Record data model.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// A raw clause pair as produced by the scanner, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCandidate<'a> {
    pub riddle: &'a str,
    pub answer: &'a str,
}

/// A normalized clause pair awaiting the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub riddle: String,
    pub answer: String,
}

impl Candidate {
    /// Normalize both clauses of a raw candidate.
    #[must_use]
    pub fn from_raw(raw: RawCandidate<'_>) -> Self {
        Self {
            riddle: normalize(raw.riddle),
            answer: normalize(raw.answer),
        }
    }

    /// Promote to a record with placeholder metadata.
    #[must_use]
    pub fn into_record(self) -> Record {
        Record::new(self.riddle, self.answer)
    }
}

/// A structured riddle/answer record.
///
/// `id` is the 1-based position in the output sequence and is reassigned
/// whenever the set is filtered, deduplicated or merged. `category` and
/// `difficulty` stay empty; they are filled in by later manual review,
/// never by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub riddle: String,
    pub answer: String,
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Record {
    /// Create a record with unassigned id and empty classification fields.
    #[must_use]
    pub fn new(riddle: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            riddle: riddle.into(),
            answer: answer.into(),
            id: 0,
            category: String::new(),
            difficulty: String::new(),
        }
    }
}
