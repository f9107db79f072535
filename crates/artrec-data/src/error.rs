//! Dataset loading errors.

use std::path::PathBuf;

/// Errors raised while reading the interaction or catalog files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV.
    #[error("malformed CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A field holds a value that cannot be interpreted.
    #[error("{path}, line {line}: invalid {field}: {reason}")]
    InvalidField {
        path: PathBuf,
        line: u64,
        field: &'static str,
        reason: String,
    },
}
