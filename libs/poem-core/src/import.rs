//! CSV decoder for card tables.
//!
//! Reads tables with a `front,back` header, such as the ones produced by
//! [`crate::export`], back into cards.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{ConvertError, Result};
use crate::types::Card;

/// Read every record of a `front,back` table.
///
/// A record that does not deserialize into a card fails the whole read with
/// its zero-based record index.
pub fn read_cards<R: Read>(reader: R) -> Result<Vec<Card>> {
    let mut rdr = ReaderBuilder::new().delimiter(b',').from_reader(reader);

    let mut cards = Vec::new();
    for (record, result) in rdr.deserialize().enumerate() {
        let card: Card = result.map_err(|source| ConvertError::MalformedRecord { record, source })?;
        cards.push(card);
    }
    Ok(cards)
}

/// Decode an in-memory table.
pub fn from_csv_str(table: &str) -> Result<Vec<Card>> {
    read_cards(table.as_bytes())
}
