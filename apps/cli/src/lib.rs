//! Command-line front end: stdin prose in, `front,back` table out.

use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Read all of stdin, convert it, and write the table to stdout.
pub fn run() -> anyhow::Result<()> {
    init_logging();

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;
    tracing::debug!(bytes = input.len(), "read input");

    let stdout = io::stdout();
    let rows = convert(&input, BufWriter::new(stdout.lock()))
        .context("failed to write table to standard output")?;
    tracing::debug!(rows, "wrote table");

    Ok(())
}

/// Convert prose into a table written to `out`, returning the data row count.
pub fn convert<W: Write>(input: &str, out: W) -> anyhow::Result<usize> {
    let cards = poem_core::parse(input);
    tracing::debug!(
        paragraphs = cards.len().saturating_sub(1),
        "split input into paragraphs"
    );

    poem_core::write_cards(out, &cards)?;
    Ok(cards.len())
}

// Logs go to stderr so stdout carries only the table. The filter is fixed;
// no environment variable is consulted.
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("warn"))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
