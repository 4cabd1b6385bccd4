use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
}

/// Dataset download and cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Directory the extracts are cached in.
    /// Existing files are reused as-is, never re-validated.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Base URL the extracts are fetched from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Download timeout in seconds (default: 300)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("imdb_data")
}

fn default_base_url() -> String {
    "https://datasets.imdbws.com/".to_string()
}

fn default_timeout() -> u64 {
    300
}

/// The two actors being compared
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonConfig {
    #[serde(default = "default_first_actor")]
    pub first_actor: String,
    #[serde(default = "default_second_actor")]
    pub second_actor: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            first_actor: default_first_actor(),
            second_actor: default_second_actor(),
        }
    }
}

fn default_first_actor() -> String {
    "Bill Murray".to_string()
}

fn default_second_actor() -> String {
    "Owen Wilson".to_string()
}
