//! Presence-based dataset cache.

use std::sync::Arc;
use tokio::fs;
use tracing::debug;

use crate::config::DatasetConfig;

use super::error::DatasetError;
use super::traits::DatasetFetcher;
use super::types::{Dataset, DatasetPaths};

/// Ensures the four extracts exist locally, downloading missing ones.
pub struct DatasetCache {
    config: DatasetConfig,
    fetcher: Arc<dyn DatasetFetcher>,
}

impl DatasetCache {
    pub fn new(config: DatasetConfig, fetcher: Arc<dyn DatasetFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Make every extract available locally and return its path.
    ///
    /// Downloads happen one at a time; any failure aborts the run.
    /// Files already present are used as-is, whatever their content.
    pub async fn ensure_all(&self) -> Result<DatasetPaths, DatasetError> {
        fs::create_dir_all(&self.config.cache_dir)
            .await
            .map_err(|e| DatasetError::Io {
                path: self.config.cache_dir.clone(),
                source: e,
            })?;

        for dataset in Dataset::ALL {
            self.ensure(dataset).await?;
        }

        Ok(DatasetPaths::new(&self.config.cache_dir))
    }

    async fn ensure(&self, dataset: Dataset) -> Result<(), DatasetError> {
        let path = dataset.local_path(&self.config.cache_dir);
        if path.exists() {
            debug!("Using cached {}", dataset.remote_name());
            return Ok(());
        }

        self.fetcher.fetch(&self.download_url(dataset), &path).await
    }

    fn download_url(&self, dataset: Dataset) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/{}", base, dataset.remote_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFetcher;
    use tempfile::TempDir;

    fn cache_for(dir: &TempDir, fetcher: Arc<MockFetcher>) -> DatasetCache {
        let config = DatasetConfig {
            cache_dir: dir.path().join("imdb"),
            base_url: "https://example.test/extracts/".to_string(),
            timeout_secs: 5,
        };
        DatasetCache::new(config, fetcher)
    }

    fn payloads_for_all(fetcher: &MockFetcher) {
        for dataset in Dataset::ALL {
            fetcher.set_payload(dataset.remote_name(), b"stub".to_vec());
        }
    }

    #[tokio::test]
    async fn test_ensure_all_downloads_missing_files() {
        let dir = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new());
        payloads_for_all(&fetcher);

        let cache = cache_for(&dir, Arc::clone(&fetcher));
        let paths = cache.ensure_all().await.unwrap();

        assert_eq!(fetcher.fetch_count(), 4);
        assert!(paths.name_basics.exists());
        assert!(paths.title_ratings.exists());
    }

    #[tokio::test]
    async fn test_ensure_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new());
        payloads_for_all(&fetcher);

        let cache = cache_for(&dir, Arc::clone(&fetcher));
        cache.ensure_all().await.unwrap();
        cache.ensure_all().await.unwrap();

        // Second pass found every file present and fetched nothing
        assert_eq!(fetcher.fetch_count(), 4);
    }

    #[tokio::test]
    async fn test_existing_file_is_never_refetched() {
        let dir = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new());
        payloads_for_all(&fetcher);

        let cache_dir = dir.path().join("imdb");
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(
            Dataset::NameBasics.local_path(&cache_dir),
            b"stale but trusted",
        )
        .unwrap();

        let cache = cache_for(&dir, Arc::clone(&fetcher));
        cache.ensure_all().await.unwrap();

        assert_eq!(fetcher.fetch_count(), 3);
        let fetched: Vec<_> = fetcher
            .recorded_fetches()
            .into_iter()
            .map(|f| f.url)
            .collect();
        assert!(!fetched.iter().any(|url| url.contains("name.basics")));
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts() {
        let dir = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new());
        // No payloads configured: every fetch fails with a 404
        let cache = cache_for(&dir, Arc::clone(&fetcher));

        let result = cache.ensure_all().await;
        assert!(matches!(
            result.unwrap_err(),
            DatasetError::Status { status: 404, .. }
        ));
        // The first failure stopped the run
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_download_url_joins_base() {
        let dir = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new());
        payloads_for_all(&fetcher);

        let cache = cache_for(&dir, Arc::clone(&fetcher));
        cache.ensure_all().await.unwrap();

        let first = &fetcher.recorded_fetches()[0];
        assert_eq!(
            first.url,
            "https://example.test/extracts/name.basics.tsv.gz"
        );
    }
}
