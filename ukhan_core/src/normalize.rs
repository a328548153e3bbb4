//! Text normalization for extracted riddle and answer clauses.
//!
//! `normalize` is pure, total and idempotent: it never fails, maps empty
//! input to empty output, and applying it twice gives the same result as
//! applying it once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::compile;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));

/// Stray glyphs that OCR and font conversion leave behind.
static ARTIFACTS: Lazy<Regex> = Lazy::new(|| compile(r"[|¥§_]"));

/// Leading characters that are neither word characters nor Devanagari.
static LEADING_JUNK: Lazy<Regex> = Lazy::new(|| compile(r"^[^\w\u{0900}-\u{097F}]+"));

/// Trailing characters outside word characters, Devanagari and `?`.
/// The danda sits inside the Devanagari block, so it survives too.
static TRAILING_JUNK: Lazy<Regex> = Lazy::new(|| compile(r"[^\w\u{0900}-\u{097F}?]+$"));

/// Danda with any surrounding whitespace.
static DANDA_SPACING: Lazy<Regex> = Lazy::new(|| compile(r"\s*।\s*"));

/// Normalize one clause of extracted text.
///
/// Collapses whitespace runs to a single space, deletes artifact glyphs,
/// trims junk from both ends and fixes danda spacing so the terminator is
/// always followed by exactly one space with none before it.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let trimmed = collapsed.trim();
    let no_artifacts = ARTIFACTS.replace_all(trimmed, "");
    let no_leading = LEADING_JUNK.replace_all(&no_artifacts, "");
    let no_trailing = TRAILING_JUNK.replace_all(&no_leading, "");
    let spaced = DANDA_SPACING.replace_all(&no_trailing, "। ");
    spaced.trim().to_string()
}
