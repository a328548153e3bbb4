//! Pre-pass cleanup of the raw extracted text stream.
//!
//! Extraction tools emit a `--- Page <n> ---` marker per page followed by
//! one line of leaked metadata (headers, page furniture). Dictionary-style
//! sources additionally print a lone section letter between entry groups.
//! Both are stripped before segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::{compile, is_devanagari};

static PAGE_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"^--- Page \d+ ---"));

/// Drop page markers, the line after each marker and section headers.
///
/// All other lines keep their content and relative order. The marker check
/// runs before the skip flag, so a marker directly following another
/// marker is treated as a marker rather than as leaked metadata.
#[must_use]
pub fn strip_artifacts(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut skip_next = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if PAGE_MARKER.is_match(trimmed) {
            skip_next = true;
            continue;
        }
        if skip_next {
            skip_next = false;
            continue;
        }
        if is_section_header(trimmed) {
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

/// A line consisting of exactly one Devanagari character.
fn is_section_header(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_devanagari(c))
}
