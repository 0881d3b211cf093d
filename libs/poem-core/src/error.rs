//! Error types for poem-core.

use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while encoding or decoding card tables.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed record {record}: {source}")]
    MalformedRecord {
        record: usize,
        #[source]
        source: csv::Error,
    },
}
