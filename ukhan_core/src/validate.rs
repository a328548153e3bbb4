//! Final record validation.
//!
//! Unlike the pre-filter, this stage reports what it drops. Warnings are
//! informational; validation never aborts the run.

use std::fmt;

use crate::record::Record;

/// Why a record was dropped during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Riddle or answer text is missing.
    MissingField { id: u32 },
    /// The riddle is implausibly short; carries an excerpt for review.
    TooShort { id: u32, excerpt: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { id } => {
                write!(f, "skipping riddle {id}: missing riddle or answer")
            }
            Self::TooShort { id, excerpt } => {
                write!(f, "riddle {id} seems too short: {excerpt}...")
            }
        }
    }
}

/// Re-check required fields and minimum riddle length.
///
/// Returns the surviving records in order plus one warning per dropped
/// record.
#[must_use]
pub fn validate(
    records: Vec<Record>,
    min_riddle_chars: usize,
) -> (Vec<Record>, Vec<ValidationWarning>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for record in records {
        if record.riddle.is_empty() || record.answer.is_empty() {
            warnings.push(ValidationWarning::MissingField { id: record.id });
            continue;
        }
        if record.riddle.chars().count() < min_riddle_chars {
            warnings.push(ValidationWarning::TooShort {
                id: record.id,
                excerpt: record.riddle.chars().take(30).collect(),
            });
            continue;
        }
        valid.push(record);
    }

    (valid, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(mut record: Record, id: u32) -> Record {
        record.id = id;
        record
    }

    #[test]
    fn keeps_valid_records() {
        let records = vec![with_id(Record::new("यो के हो ?", "दुध।"), 1)];
        let (valid, warnings) = validate(records, 5);
        assert_eq!(valid.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn empty_answer_drops_with_one_warning_naming_the_id() {
        let records = vec![
            with_id(Record::new("यो के हो ?", "दुध।"), 1),
            with_id(Record::new("त्यो के हो ?", ""), 2),
        ];
        let (valid, warnings) = validate(records, 5);
        assert_eq!(valid.len(), 1);
        assert_eq!(warnings, vec![ValidationWarning::MissingField { id: 2 }]);
        assert!(warnings[0].to_string().contains('2'));
    }

    #[test]
    fn short_riddle_warning_carries_excerpt() {
        let records = vec![with_id(Record::new("हो ?", "दुध।"), 7)];
        let (valid, warnings) = validate(records, 5);
        assert!(valid.is_empty());
        match &warnings[0] {
            ValidationWarning::TooShort { id, excerpt } => {
                assert_eq!(*id, 7);
                assert_eq!(excerpt, "हो ?");
            }
            other => panic!("unexpected warning {other:?}"),
        }
    }

    #[test]
    fn excerpt_is_capped_at_thirty_characters() {
        let long = "क".repeat(40);
        let mut record = Record::new(long, "");
        record.id = 3;
        let (_, warnings) = validate(vec![record], 5);
        // Missing answer is reported first, so force the length path.
        assert_eq!(warnings, vec![ValidationWarning::MissingField { id: 3 }]);

        let long = "क ".repeat(40);
        let record = with_id(Record::new(long, "छ।"), 4);
        let (_, warnings) = validate(vec![record], 200);
        match &warnings[0] {
            ValidationWarning::TooShort { excerpt, .. } => {
                assert_eq!(excerpt.chars().count(), 30);
            }
            other => panic!("unexpected warning {other:?}"),
        }
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            with_id(Record::new("पहिलो के हो ?", "एक।"), 1),
            with_id(Record::new("", ""), 2),
            with_id(Record::new("तेस्रो के हो ?", "तीन।"), 3),
        ];
        let (valid, _) = validate(records, 5);
        let ids: Vec<u32> = valid.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
