//! List-grammar scanner: segmentation and clause extraction.
//!
//! The source text is an enumerated list. Each entry opens with a list
//! marker (Devanagari letters plus a period and whitespace), carries a
//! riddle clause that closes with the interrogative phrase, and ends with
//! an answer clause that runs to the next marker, the next line break or
//! the end of input, whichever comes first.
//!
//! The grammar is driven as an explicit state machine
//! (`AwaitingMarker -> InRiddleClause -> InAnswerClause`) so the boundary
//! precedence is a plain, testable rule instead of backtracking behavior.
//! `segment` and `extract` expose the two phases individually.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::record::RawCandidate;
use crate::util::compile;

/// Entry delimiter: Devanagari letters, a period, required whitespace.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"[\u{0900}-\u{097F}]+\.\s+"));

/// Riddle clause from the start of an item through the interrogative
/// phrase and its closing question mark (ASCII or full-width).
static INTERROGATIVE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)^(.+?\s*[।,]?\s+के\s+हो\s+[?？])"));

/// A marker that leaked into an answer clause because its trailing
/// whitespace was lost, so it never became a segmentation boundary.
static LEAKED_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"[\u{0900}-\u{097F}]+\."));

/// Scanner states over the list grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the next list marker; preamble text is skipped.
    AwaitingMarker,
    /// Inside an item, searching for its interrogative span.
    InRiddleClause,
    /// Past the interrogative span, collecting the answer clause.
    InAnswerClause,
}

/// Scan result with item accounting for observability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<'a> {
    pub candidates: Vec<RawCandidate<'a>>,
    /// Items seen, including ones that produced no candidate.
    pub items: usize,
    /// Items dropped for lack of an interrogative span or answer text.
    pub dropped: usize,
}

/// Walk the whole text and collect raw candidates.
///
/// Items without a detectable interrogative span or with an empty answer
/// clause are dropped silently; partial extraction is the expected steady
/// state for this kind of input, so drops are only counted and logged at
/// debug level.
#[must_use]
pub fn scan(text: &str) -> ScanOutcome<'_> {
    let mut candidates = Vec::new();
    let mut items = 0usize;
    let mut dropped = 0usize;

    let mut state = ScanState::AwaitingMarker;
    let mut pos = 0usize;
    let mut item_end = 0usize;
    let mut clause_end = 0usize;

    loop {
        match state {
            ScanState::AwaitingMarker => {
                let Some(marker) = LIST_MARKER.find_at(text, pos) else {
                    break;
                };
                pos = marker.end();
                item_end = LIST_MARKER
                    .find_at(text, pos)
                    .map_or(text.len(), |next| next.start());
                state = ScanState::InRiddleClause;
            }
            ScanState::InRiddleClause => {
                items += 1;
                let item = &text[pos..item_end];
                if let Some(span) = INTERROGATIVE.captures(item).and_then(|caps| caps.get(1)) {
                    clause_end = pos + span.end();
                    state = ScanState::InAnswerClause;
                } else {
                    debug!(
                        item = %excerpt(item),
                        "no interrogative span, dropping item"
                    );
                    dropped += 1;
                    pos = item_end;
                    state = ScanState::AwaitingMarker;
                }
            }
            ScanState::InAnswerClause => {
                let riddle = text[pos..clause_end].trim();
                let tail = text[clause_end..item_end].trim_start();
                let answer = tail[..answer_boundary(tail)].trim_end();
                if answer.is_empty() {
                    debug!(riddle = %excerpt(riddle), "empty answer clause, dropping item");
                    dropped += 1;
                } else {
                    candidates.push(RawCandidate { riddle, answer });
                }
                pos = item_end;
                state = ScanState::AwaitingMarker;
            }
        }
    }

    ScanOutcome {
        candidates,
        items,
        dropped,
    }
}

/// Split text into raw items, one per list marker.
///
/// The marker itself is consumed and text before the first marker is
/// discarded as preamble. Text with no markers yields no items.
#[must_use]
pub fn segment(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut after_marker: Option<usize> = None;
    for marker in LIST_MARKER.find_iter(text) {
        if let Some(start) = after_marker {
            items.push(&text[start..marker.start()]);
        }
        after_marker = Some(marker.end());
    }
    if let Some(start) = after_marker {
        items.push(&text[start..]);
    }
    items
}

/// Extract the clause pair from a single raw item.
///
/// Returns `None` when the item has no interrogative span or its answer
/// clause is empty.
#[must_use]
pub fn extract(item: &str) -> Option<RawCandidate<'_>> {
    let span = INTERROGATIVE.captures(item)?.get(1)?;
    let tail = item[span.end()..].trim_start();
    let answer = tail[..answer_boundary(tail)].trim_end();
    if answer.is_empty() {
        None
    } else {
        Some(RawCandidate {
            riddle: span.as_str().trim(),
            answer,
        })
    }
}

/// Where the answer clause ends: at the next list marker (spaced or not),
/// at the next line break, or at the end of input, whichever is earliest.
fn answer_boundary(tail: &str) -> usize {
    let newline = tail.find('\n').unwrap_or(tail.len());
    let marker = LEAKED_MARKER
        .find(tail)
        .map_or(tail.len(), |leaked| leaked.start());
    newline.min(marker)
}

fn excerpt(text: &str) -> String {
    text.chars().take(30).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_returns_no_items_without_markers() {
        assert!(segment("no markers in sight").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn segment_returns_one_item_per_marker() {
        let text = "शीर्षक क. पहिलो ख. दोस्रो ग. तेस्रो";
        let items = segment(text);
        assert_eq!(items, vec!["पहिलो ", "दोस्रो ", "तेस्रो"]);
    }

    #[test]
    fn segment_discards_preamble() {
        let items = segment("भूमिका पाठ क. सामग्री");
        assert_eq!(items, vec!["सामग्री"]);
    }

    #[test]
    fn segment_keeps_trailing_empty_item() {
        let items = segment("क. पहिलो ख. ");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], "");
    }

    #[test]
    fn marker_needs_trailing_whitespace() {
        assert!(segment("क.पहिलो").is_empty());
    }

    #[test]
    fn extract_splits_riddle_and_answer() {
        let candidate = extract("यो के हो ? जवाफ हो फलामको मुढा। ");
        assert_eq!(
            candidate,
            Some(RawCandidate {
                riddle: "यो के हो ?",
                answer: "जवाफ हो फलामको मुढा।",
            })
        );
    }

    #[test]
    fn extract_accepts_fullwidth_question_mark() {
        let candidate = extract("यो के हो ？ दुध।");
        assert_eq!(
            candidate,
            Some(RawCandidate {
                riddle: "यो के हो ？",
                answer: "दुध।",
            })
        );
    }

    #[test]
    fn extract_accepts_danda_before_phrase() {
        let candidate = extract("अगाडि छ। के हो ? दही।");
        assert_eq!(
            candidate,
            Some(RawCandidate {
                riddle: "अगाडि छ। के हो ?",
                answer: "दही।",
            })
        );
    }

    #[test]
    fn extract_without_interrogative_yields_nothing() {
        assert_eq!(extract("कुनै प्रश्न छैन यहाँ"), None);
    }

    #[test]
    fn extract_without_answer_yields_nothing() {
        assert_eq!(extract("यो के हो ?   "), None);
    }

    #[test]
    fn answer_stops_at_line_break() {
        let candidate = extract("यो के हो ? दुध।\nअर्को लाइन");
        assert_eq!(
            candidate.map(|c| c.answer),
            Some("दुध।")
        );
    }

    #[test]
    fn answer_stops_at_leaked_marker() {
        // Over-merged item where the second entry's marker lost its
        // trailing whitespace and never became a segmentation boundary.
        let candidate = extract("यो के हो ? दुध। ख.त्यो सेतो के हो ? दही।");
        assert_eq!(
            candidate.map(|c| c.answer),
            Some("दुध।")
        );
    }

    #[test]
    fn answer_boundary_prefers_earliest() {
        assert_eq!(answer_boundary("दुध।\nख. पछि"), "दुध।".len());
        let with_marker = "उत्तर ख. पछि\nलाइन";
        let expected = "उत्तर ".len();
        assert_eq!(answer_boundary(with_marker), expected);
        assert_eq!(answer_boundary("दुध।"), "दुध।".len());
    }

    #[test]
    fn scan_walks_multiple_items() {
        let text = "क. यो के हो ? जवाफ हो फलामको मुढा। ख. यो सेतो के हो ? दुध।";
        let outcome = scan(text);
        assert_eq!(outcome.items, 2);
        assert_eq!(outcome.dropped, 0);
        assert_eq!(
            outcome.candidates,
            vec![
                RawCandidate {
                    riddle: "यो के हो ?",
                    answer: "जवाफ हो फलामको मुढा।",
                },
                RawCandidate {
                    riddle: "यो सेतो के हो ?",
                    answer: "दुध।",
                },
            ]
        );
    }

    #[test]
    fn scan_counts_dropped_items() {
        let text = "क. प्रश्न छैन ख. यो के हो ? दुध।";
        let outcome = scan(text);
        assert_eq!(outcome.items, 2);
        assert_eq!(outcome.dropped, 1);
        assert_eq!(outcome.candidates.len(), 1);
    }

    #[test]
    fn scan_of_markerless_text_is_empty() {
        let outcome = scan("preamble only, nothing enumerated");
        assert_eq!(outcome.items, 0);
        assert!(outcome.candidates.is_empty());
    }

    #[test]
    fn scan_agrees_with_segment_and_extract() {
        let text = "क. यो के हो ? दुध। ख. बिना प्रश्न ग. त्यो के हो ? दही।";
        let from_scan = scan(text).candidates;
        let from_parts: Vec<_> = segment(text).into_iter().filter_map(extract).collect();
        assert_eq!(from_scan, from_parts);
    }
}
