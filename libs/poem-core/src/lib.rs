//! Core library for turning prose into flashcard tables.
//!
//! Provides:
//! - Paragraph splitter and pair emitter (`parser`)
//! - CSV encoder for `front,back` tables (`export`)
//! - CSV decoder for reading those tables back (`import`)
//! - Shared types (Card, sentinels)

pub mod error;
pub mod export;
pub mod import;
pub mod parser;
pub mod types;

pub use error::{ConvertError, Result};
pub use export::{to_csv_string, write_cards};
pub use import::{from_csv_str, read_cards};
pub use parser::{augment, pair, parse, split_paragraphs};
pub use types::{Card, HEADER, PARAGRAPH_DELIMITER, SENTINEL_BEGIN, SENTINEL_END};
