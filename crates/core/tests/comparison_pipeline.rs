//! End-to-end pipeline tests over a synthetic mini-dataset.
//!
//! These tests drive the full runner with a mock fetcher serving
//! gzipped TSV fixtures from disk:
//! - resolution, partitioning and aggregation against known data
//! - cache idempotence across runs
//! - error propagation for unknown actors and failed downloads

use std::sync::Arc;

use tempfile::TempDir;

use costar_core::{
    CatalogError, ComparisonConfig, ComparisonRunner, Config, DatasetConfig, DatasetError,
    DatasetFetcher, PipelineError, Verdict,
    testing::{fixtures, MockFetcher},
};

/// Test helper wiring the runner to a mock fetcher and a temp cache.
struct TestHarness {
    fetcher: Arc<MockFetcher>,
    cache_dir: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cache_dir = temp_dir.path().join("imdb_data");

        let fetcher = Arc::new(MockFetcher::new());
        for (remote_name, payload) in fixtures::mini_dataset() {
            fetcher.set_payload(remote_name, payload);
        }

        Self {
            fetcher,
            cache_dir,
            _temp_dir: temp_dir,
        }
    }

    fn runner(&self, first_actor: &str, second_actor: &str) -> ComparisonRunner {
        let config = Config {
            dataset: DatasetConfig {
                cache_dir: self.cache_dir.clone(),
                base_url: "https://example.test/".to_string(),
                timeout_secs: 5,
            },
            comparison: ComparisonConfig {
                first_actor: first_actor.to_string(),
                second_actor: second_actor.to_string(),
            },
        };
        ComparisonRunner::new(config, Arc::clone(&self.fetcher) as Arc<dyn DatasetFetcher>)
    }
}

#[tokio::test]
async fn test_full_comparison_over_mini_dataset() {
    let harness = TestHarness::new();
    let report = harness
        .runner("Jane Doe", "John Roe")
        .run()
        .await
        .expect("Pipeline failed");

    // "Jane Doe" is ambiguous; the actress must win over the director
    assert_eq!(report.first.nconst, "nm0000011");
    assert_eq!(report.second.nconst, "nm0000012");

    assert_eq!(report.first.movie_count, 2);
    assert_eq!(report.second.movie_count, 2);
    assert_eq!(report.shared_count, 1);

    assert_eq!(report.together.mean, Some(6.0));
    assert_eq!(report.together.rated_count, 1);
    assert_eq!(report.together.titles, vec!["Joint Venture".to_string()]);

    assert_eq!(report.first_solo.mean, Some(8.0));
    assert_eq!(report.first_solo.rated_count, 1);
    assert_eq!(report.second_solo.mean, Some(4.0));
    assert_eq!(report.second_solo.rated_count, 1);

    // 6.0 sits between 8.0 and 4.0
    assert_eq!(report.verdict(), Some(Verdict::Mixed));
    let (first_delta, second_delta) = report.solo_deltas();
    assert!((first_delta.unwrap() + 2.0).abs() < 1e-9);
    assert!((second_delta.unwrap() - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_second_run_reuses_cached_files() {
    let harness = TestHarness::new();
    let runner = harness.runner("Jane Doe", "John Roe");

    runner.run().await.expect("First run failed");
    assert_eq!(harness.fetcher.fetch_count(), 4);

    runner.run().await.expect("Second run failed");
    // Everything was already on disk; no additional downloads
    assert_eq!(harness.fetcher.fetch_count(), 4);
}

#[tokio::test]
async fn test_unknown_actor_fails_with_not_found() {
    let harness = TestHarness::new();
    let result = harness.runner("Jane Doe", "Nobody Famous").run().await;

    let err = result.unwrap_err();
    match err {
        PipelineError::Catalog(CatalogError::PersonNotFound(name)) => {
            assert_eq!(name, "Nobody Famous");
        }
        other => panic!("Expected PersonNotFound, got: {other}"),
    }
}

#[tokio::test]
async fn test_download_failure_aborts_run() {
    let harness = TestHarness::new();
    harness.fetcher.fail_next_with_status(500);

    let result = harness.runner("Jane Doe", "John Roe").run().await;
    assert!(matches!(
        result.unwrap_err(),
        PipelineError::Dataset(DatasetError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_same_actor_comparison_has_no_solo_slices() {
    let harness = TestHarness::new();
    // Comparing John with himself degenerates to an all-shared split
    let report = harness
        .runner("John Roe", "John Roe")
        .run()
        .await
        .expect("Pipeline failed");

    assert_eq!(report.shared_count, 2);
    assert!(report.first_solo.titles.is_empty());
    assert_eq!(report.first_solo.mean, None);
    // Together mean over 6.0 and 4.0
    assert_eq!(report.together.mean, Some(5.0));
    assert_eq!(report.verdict(), None);
}
