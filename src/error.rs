use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Crate-wide error type
// ---------------------------------------------------------------------------

/// Failure kinds of the inflammation data layer.
///
/// Malformed input fails the whole load on the first bad line; there is no
/// partial or best-effort result.
#[derive(Debug, Error)]
pub enum DataError {
    /// The requested filename does not exist inside the data folder.
    /// Raised before the file is opened.
    #[error("input file {filename:?} not found in data folder {folder:?}")]
    InvalidInput { filename: String, folder: PathBuf },

    /// A data line's field count does not match the file's record layout.
    /// `line` is 1-based and counts the header.
    #[error("line {line}: expected {expected} comma-separated fields, found {found}")]
    ShapeMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// An age or measurement field did not parse as an integer.
    /// `line` is 1-based and counts the header.
    #[error("line {line}: {role} field {value:?} is not an integer")]
    MalformedField {
        line: usize,
        role: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Positional access past the end of a dataset.
    #[error("index {index} out of range for dataset of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Low-level read failure from the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DataError>;
