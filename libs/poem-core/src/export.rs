//! CSV encoder for card tables.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::types::{Card, HEADER};

/// Write the `front,back` header followed by one record per card.
///
/// Fields are quoted only when they contain a comma, a quote, or a line
/// break. Records end with `\n`. The header is written even for an empty
/// slice.
pub fn write_cards<W: Write>(writer: W, cards: &[Card]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for card in cards {
        wtr.serialize(card)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Encode cards into an in-memory table.
pub fn to_csv_string(cards: &[Card]) -> Result<String> {
    let mut buf = Vec::new();
    write_cards(&mut buf, cards)?;
    let table =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(table)
}
