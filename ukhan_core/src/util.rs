//! Shared helpers for the engine modules.

use regex::Regex;

/// Compile one of the crate's built-in patterns.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern failed to compile: {e}"))
}

/// Whether a character belongs to the Devanagari block.
pub(crate) const fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}
