//! Paragraph splitter and pair emitter.
//!
//! # Format
//! ```text
//! The first paragraph,
//! which may span lines.
//!
//! The second paragraph.
//! ```
//!
//! becomes the rows `(BEGIN, first)`, `(first, second)` and `(second, END)`.

use crate::types::{Card, PARAGRAPH_DELIMITER, SENTINEL_BEGIN, SENTINEL_END};

/// Parse text into cards, one per pair of adjacent paragraphs.
pub fn parse(text: &str) -> Vec<Card> {
    pair(&augment(split_paragraphs(text)))
}

/// Split text on every literal `"\n\n"`.
///
/// Paragraphs keep their internal newlines and surrounding whitespace. Extra
/// newlines past a boundary are not collapsed, so `"a\n\n\n\nb"` splits into
/// `["a", "", "b"]`. Zero-length input has no paragraphs at all.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(PARAGRAPH_DELIMITER).collect()
}

/// Bracket paragraphs with the begin and end sentinels.
pub fn augment<'a>(paragraphs: Vec<&'a str>) -> Vec<&'a str> {
    let mut sequence = Vec::with_capacity(paragraphs.len() + 2);
    sequence.push(SENTINEL_BEGIN);
    sequence.extend(paragraphs);
    sequence.push(SENTINEL_END);
    sequence
}

/// Pair every element with its successor, preserving order.
pub fn pair(sequence: &[&str]) -> Vec<Card> {
    sequence
        .windows(2)
        .map(|w| Card::new(w[0], w[1]))
        .collect()
}
