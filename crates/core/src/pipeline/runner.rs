//! The comparison pipeline runner.

use std::sync::Arc;
use tracing::info;

use crate::catalog::{
    Catalog, NAME_COLUMNS, PRINCIPAL_COLUMNS, RATING_COLUMNS, TITLE_COLUMNS,
};
use crate::compare::{partition, summarize};
use crate::config::Config;
use crate::dataset::{DatasetCache, DatasetFetcher};
use crate::table::load_table;

use super::error::PipelineError;
use super::types::{ActorSummary, ComparisonReport};

/// Drives one full comparison run.
///
/// The run is strictly sequential; nothing is shared or mutated across
/// stages except the read-only catalog.
pub struct ComparisonRunner {
    config: Config,
    fetcher: Arc<dyn DatasetFetcher>,
}

impl ComparisonRunner {
    pub fn new(config: Config, fetcher: Arc<dyn DatasetFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub async fn run(&self) -> Result<ComparisonReport, PipelineError> {
        let first_name = &self.config.comparison.first_actor;
        let second_name = &self.config.comparison.second_actor;

        info!("Comparing {} with {}", first_name, second_name);

        let cache = DatasetCache::new(self.config.dataset.clone(), Arc::clone(&self.fetcher));
        let paths = cache.ensure_all().await?;

        let names = load_table(&paths.name_basics, &NAME_COLUMNS)?;
        let titles = load_table(&paths.title_basics, &TITLE_COLUMNS)?;
        let principals = load_table(&paths.title_principals, &PRINCIPAL_COLUMNS)?;
        let ratings = load_table(&paths.title_ratings, &RATING_COLUMNS)?;

        let catalog = Catalog::from_relations(&names, &titles, &principals, &ratings)?;
        // The relations are large and fully indexed now; free them
        // before the lookup stages
        drop((names, titles, principals, ratings));

        let first = catalog.resolve_person(first_name)?.clone();
        let second = catalog.resolve_person(second_name)?.clone();
        info!("Found {}: {}", first.name, first.nconst);
        info!("Found {}: {}", second.name, second.nconst);

        let first_movies = catalog.filmography(&first.nconst);
        let second_movies = catalog.filmography(&second.nconst);
        info!(
            "{}: {} movies, {}: {} movies",
            first.name,
            first_movies.len(),
            second.name,
            second_movies.len()
        );

        let split = partition(&first_movies, &second_movies);
        info!("Movies together: {}", split.both.len());

        let together = summarize(&catalog, &split.both);
        let first_solo = summarize(&catalog, &split.only_first);
        let second_solo = summarize(&catalog, &split.only_second);

        Ok(ComparisonReport {
            first: ActorSummary {
                name: first.name,
                nconst: first.nconst,
                movie_count: first_movies.len(),
            },
            second: ActorSummary {
                name: second.name,
                nconst: second.nconst,
                movie_count: second_movies.len(),
            },
            shared_count: split.both.len(),
            together,
            first_solo,
            second_solo,
        })
    }
}
