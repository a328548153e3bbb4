//! Candidate pre-filter.
//!
//! Rejections here are silent; the validator at the end of the pipeline is
//! the stage that reports. Length limits apply to normalized text and are
//! counted in characters, not bytes.

use crate::pipeline::PipelineConfig;
use crate::record::Candidate;

/// Whether a normalized candidate is worth keeping.
///
/// Rejects empty fields, fields under the configured minimum lengths, and
/// riddles that leaked metadata tokens (page headers and the like).
#[must_use]
pub fn accept(candidate: &Candidate, config: &PipelineConfig) -> bool {
    if candidate.riddle.is_empty() || candidate.answer.is_empty() {
        return false;
    }
    if candidate.riddle.chars().count() < config.min_riddle_chars
        || candidate.answer.chars().count() < config.min_answer_chars
    {
        return false;
    }
    let riddle = candidate.riddle.to_lowercase();
    !config
        .metadata_blocklist
        .iter()
        .any(|token| riddle.contains(token.as_str()))
}
