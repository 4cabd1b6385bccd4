//! Core library of costar: comparative movie-rating statistics for a
//! pair of actors, computed from the IMDb Non-Commercial Datasets.
//!
//! The pipeline is a single forward pass: ensure the dataset cache,
//! load the extracts, build the in-memory catalog, resolve both
//! actors, partition their filmographies into together/solo sets and
//! aggregate ratings per set. See [`pipeline::ComparisonRunner`].

pub mod catalog;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod table;
pub mod testing;

pub use catalog::{Catalog, CatalogError, Filmography, PersonRecord};
pub use compare::{partition, summarize, FilmographyPartition, RatingSummary};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, ComparisonConfig,
    Config, ConfigError, DatasetConfig,
};
pub use dataset::{
    Dataset, DatasetCache, DatasetError, DatasetFetcher, DatasetPaths, HttpFetcher,
};
pub use pipeline::{ActorSummary, ComparisonReport, ComparisonRunner, PipelineError, Verdict};
pub use table::{load_table, Relation, TableError};
