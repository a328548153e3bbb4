#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Legacy-font glyph remapping.
//!
//! Documents set in legacy Nepali fonts encode Devanagari text as Latin
//! codepoints; a per-font mapping table turns those glyph sequences back
//! into Unicode. The mapper is an explicitly constructed value handed to
//! callers, never process-wide state, so extraction stays testable without
//! filesystem-resident tables.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or applying a mapping table.
#[derive(Debug, Error)]
pub enum FontError {
    /// The requested font has no table in the loaded mapping.
    #[error("unknown font: {0}")]
    UnknownFont(String),

    /// The mapping table file could not be read.
    #[error("failed to read mapping table: {0}")]
    Io(#[from] std::io::Error),

    /// The mapping table file is not valid JSON of the expected shape.
    #[error("invalid mapping table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One font's glyph table as stored on disk: source glyph sequence to
/// Unicode replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphTable {
    pub map: HashMap<String, String>,
}

/// Compiled glyph remapper over one or more font tables.
#[derive(Debug, Clone)]
pub struct FontMapper {
    /// Per font, rules sorted longest source sequence first so multi-glyph
    /// conjuncts win over their single-glyph prefixes.
    fonts: HashMap<String, Vec<(String, String)>>,
}

impl FontMapper {
    /// Build a mapper from already-parsed tables.
    ///
    /// Empty source sequences are ignored; they can never match and would
    /// stall the rewrite loop.
    #[must_use]
    pub fn new(tables: HashMap<String, GlyphTable>) -> Self {
        let fonts = tables
            .into_iter()
            .map(|(font, table)| {
                let mut rules: Vec<(String, String)> = table
                    .map
                    .into_iter()
                    .filter(|(from, _)| !from.is_empty())
                    .collect();
                rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
                (font, rules)
            })
            .collect();
        Self { fonts }
    }

    /// Parse a mapping table from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, FontError> {
        let tables: HashMap<String, GlyphTable> = serde_json::from_str(json)?;
        Ok(Self::new(tables))
    }

    /// Load a mapping table file.
    pub fn from_path(path: &Path) -> Result<Self, FontError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Whether a table for `font` was loaded.
    #[must_use]
    pub fn has_font(&self, font: &str) -> bool {
        self.fonts.contains_key(font)
    }

    /// Remap legacy glyph text to Unicode.
    ///
    /// Pure over its inputs: at each position the longest matching source
    /// sequence is replaced, unmatched characters pass through unchanged.
    pub fn map_to_unicode(&self, text: &str, from_font: &str) -> Result<String, FontError> {
        let rules = self
            .fonts
            .get(from_font)
            .ok_or_else(|| FontError::UnknownFont(from_font.to_string()))?;

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        'scan: while let Some(ch) = rest.chars().next() {
            for (from, to) in rules {
                if rest.starts_with(from.as_str()) {
                    out.push_str(to);
                    rest = &rest[from.len()..];
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        Ok(out)
    }
}
