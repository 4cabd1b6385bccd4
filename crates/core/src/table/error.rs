//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Could not open or read the extract file.
    #[error("Failed to read table file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not readable as tab-separated data.
    #[error("Failed to parse table file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A requested column is missing from the header row.
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}
