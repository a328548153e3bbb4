//! Pipeline orchestration and configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cleaner::strip_artifacts;
use crate::dedup::dedup;
use crate::filter::accept;
use crate::metadata::assign_metadata;
use crate::record::{Candidate, Record};
use crate::scan::scan;
use crate::validate::{ValidationWarning, validate};

/// Tunable thresholds for the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum riddle length in characters after normalization.
    #[serde(default = "default_min_riddle_chars")]
    pub min_riddle_chars: usize,

    /// Minimum answer length in characters after normalization.
    #[serde(default = "default_min_answer_chars")]
    pub min_answer_chars: usize,

    /// Tokens whose presence in a riddle marks leaked page metadata.
    /// Matched case-insensitively as substrings.
    #[serde(default = "default_metadata_blocklist")]
    pub metadata_blocklist: Vec<String>,
}

const fn default_min_riddle_chars() -> usize {
    5
}

const fn default_min_answer_chars() -> usize {
    2
}

fn default_metadata_blocklist() -> Vec<String> {
    ["page", "पेज", "पृष्ठ"].map(str::to_string).to_vec()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_riddle_chars: default_min_riddle_chars(),
            min_answer_chars: default_min_answer_chars(),
            metadata_blocklist: default_metadata_blocklist(),
        }
    }
}

/// Stage counters for operator reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// List items seen by the scanner.
    pub items: usize,
    /// Candidates with both clauses extracted.
    pub extracted: usize,
    /// Candidates that passed the pre-filter.
    pub accepted: usize,
    /// Records left after deduplication.
    pub unique: usize,
    /// Records that survived validation.
    pub valid: usize,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub records: Vec<Record>,
    pub warnings: Vec<ValidationWarning>,
    pub stats: PipelineStats,
}

/// The full cleaning pipeline, a single forward pass with no back-edges.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Pipeline with the stock thresholds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Run every stage over one raw text stream.
    ///
    /// Never fails; noisy or markerless input simply produces an empty
    /// record set.
    #[must_use]
    pub fn run(&self, raw_text: &str) -> PipelineOutcome {
        let cleaned = strip_artifacts(raw_text);
        let scanned = scan(&cleaned);
        debug!(
            items = scanned.items,
            dropped = scanned.dropped,
            "scanned list items"
        );

        let extracted = scanned.candidates.len();
        let mut records: Vec<Record> = Vec::with_capacity(extracted);
        for raw in scanned.candidates {
            let candidate = Candidate::from_raw(raw);
            if accept(&candidate, &self.config) {
                records.push(candidate.into_record());
            }
        }
        let accepted = records.len();
        debug!(extracted, accepted, "normalized and filtered candidates");

        let mut records = dedup(records);
        let unique = records.len();
        assign_metadata(&mut records);

        let (records, warnings) = validate(records, self.config.min_riddle_chars);
        debug!(unique, valid = records.len(), "deduplicated and validated");

        PipelineOutcome {
            stats: PipelineStats {
                items: scanned.items,
                extracted,
                accepted,
                unique,
                valid: records.len(),
            },
            records,
            warnings,
        }
    }
}
