//! Error types for deck_compare

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for loading price lists and decklists.
///
/// Every variant is fatal to the run. Unknown cards are not errors; they
/// are priced with the configured default instead.
#[derive(Debug, Error)]
pub enum CompareError {
    /// File missing or unreadable
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// CSV framing error (bad quoting, invalid UTF-8, ...)
    #[error("CSV error in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },
    /// Price list row with an unparseable price or missing columns
    #[error("Malformed price row {row}: {reason}")]
    MalformedPriceRow { row: u64, reason: String },
    /// Decklist line not of the form `<quantity> <card name>`
    #[error("Malformed deck line {line_number} in {origin}: {line:?} ({reason})")]
    MalformedDeckLine {
        origin: String,
        line_number: usize,
        line: String,
        reason: String,
    },
}

/// Short name used throughout the crate
pub type Error = CompareError;

/// Result alias for deck_compare operations
pub type Result<T> = std::result::Result<T, CompareError>;

impl CompareError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompareError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(origin: &str, source: csv::Error) -> Self {
        CompareError::Csv {
            origin: origin.to_string(),
            source,
        }
    }
}
