//! Fetcher seam for the dataset cache.

use async_trait::async_trait;
use std::path::Path;

use super::error::DatasetError;

/// Fetches one remote file to a local destination.
///
/// Implementations must either produce the complete file at `dest` or
/// fail without leaving a partial file behind at that path.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), DatasetError>;
}
