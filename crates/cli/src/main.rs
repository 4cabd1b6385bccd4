mod report;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use costar_core::{
    load_config, load_config_from_env, validate_config, ComparisonRunner, Config, DatasetFetcher,
    HttpFetcher,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("costar {}", VERSION);

    let config = resolve_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    info!(
        "Comparing '{}' and '{}', cache directory {:?}",
        config.comparison.first_actor, config.comparison.second_actor, config.dataset.cache_dir
    );

    let fetcher: Arc<dyn DatasetFetcher> = Arc::new(
        HttpFetcher::new(Duration::from_secs(config.dataset.timeout_secs))
            .context("Failed to build HTTP fetcher")?,
    );

    let runner = ComparisonRunner::new(config, fetcher);
    let comparison = runner.run().await.context("Comparison failed")?;

    print!("{}", report::render(&comparison));

    Ok(())
}

/// Determine the configuration source.
///
/// An explicit `COSTAR_CONFIG` path must exist. Without one, a
/// `config.toml` in the working directory is used when present;
/// otherwise defaults plus `COSTAR_`-prefixed environment overrides
/// apply, so the tool runs with no configuration file at all.
fn resolve_config() -> Result<Config> {
    if let Ok(path) = std::env::var("COSTAR_CONFIG") {
        let path = PathBuf::from(path);
        info!("Loading configuration from {:?}", path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let default_path = PathBuf::from("config.toml");
    if default_path.exists() {
        info!("Loading configuration from {:?}", default_path);
        return load_config(&default_path)
            .with_context(|| format!("Failed to load config from {:?}", default_path));
    }

    load_config_from_env().context("Failed to read configuration from environment")
}
