//! Error types for the dataset cache.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ensuring the dataset cache.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Network-level download failure.
    #[error("Download failed for {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Download of {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// Cache directory or file write failure.
    #[error("Filesystem error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
