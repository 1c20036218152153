use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Data-layer error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the data directory and a loaded
/// [`Recording`](crate::data::model::Recording). No variant is retried:
/// a failure ends the current render pass and the next user interaction
/// starts fresh.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data directory is missing or unreadable. Fatal at startup.
    #[error("cannot read data directory {}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The selected file vanished between listing and load.
    #[error("recording file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The CSV header lacks one of the expected columns.
    #[error("missing expected column '{0}'")]
    MissingColumn(&'static str),

    /// An amplitude cell did not parse as a number.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    BadValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The file does not contain exactly the expected number of sample rows.
    #[error("expected {expected} sample rows, found {actual}")]
    RowCount { expected: usize, actual: usize },

    /// Reader-level CSV failure (I/O, ragged rows, encoding).
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
}
