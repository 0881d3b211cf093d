//! Core types for card tables.

use serde::{Deserialize, Serialize};

/// Marker paired with the first paragraph.
pub const SENTINEL_BEGIN: &str = "BEGIN";

/// Marker paired with the last paragraph.
pub const SENTINEL_END: &str = "END";

/// Boundary between paragraphs. Matched literally, runs are not collapsed.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Column names of every table, in order.
pub const HEADER: [&str; 2] = ["front", "back"];

/// One table row: a paragraph and the one that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}
