//! Mock dataset fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::dataset::{DatasetError, DatasetFetcher};

/// A recorded fetch for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    /// The URL that was requested.
    pub url: String,
    /// Where the file was written.
    pub dest: PathBuf,
}

/// Mock implementation of the [`DatasetFetcher`] trait.
///
/// Provides controllable behavior for testing:
/// - Serves configured payloads keyed by the URL's file name
/// - Records every fetch for assertions
/// - Can fail the next fetch with a chosen HTTP status
///
/// A fetch for a file with no configured payload fails with a 404,
/// which doubles as the "unexpected download" signal in tests.
#[derive(Debug, Default)]
pub struct MockFetcher {
    payloads: RwLock<HashMap<String, Vec<u8>>>,
    fetches: RwLock<Vec<RecordedFetch>>,
    fail_next_status: RwLock<Option<u16>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the payload served for a remote file name.
    pub fn set_payload(&self, remote_name: &str, bytes: Vec<u8>) {
        self.payloads
            .write()
            .unwrap()
            .insert(remote_name.to_string(), bytes);
    }

    /// Make the next fetch fail with the given HTTP status.
    pub fn fail_next_with_status(&self, status: u16) {
        *self.fail_next_status.write().unwrap() = Some(status);
    }

    /// Every fetch made so far, in order.
    pub fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.fetches.read().unwrap().clone()
    }

    /// Number of fetches made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.read().unwrap().len()
    }
}

#[async_trait]
impl DatasetFetcher for MockFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), DatasetError> {
        self.fetches.write().unwrap().push(RecordedFetch {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });

        if let Some(status) = self.fail_next_status.write().unwrap().take() {
            return Err(DatasetError::Status {
                url: url.to_string(),
                status,
            });
        }

        let remote_name = url.rsplit('/').next().unwrap_or(url);
        let bytes = match self.payloads.read().unwrap().get(remote_name) {
            Some(bytes) => bytes.clone(),
            None => {
                return Err(DatasetError::Status {
                    url: url.to_string(),
                    status: 404,
                })
            }
        };

        tokio::fs::write(dest, bytes)
            .await
            .map_err(|e| DatasetError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;
        Ok(())
    }
}
