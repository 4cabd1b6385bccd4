//! Error type for the comparison pipeline.

use thiserror::Error;

/// Errors that can abort a comparison run.
///
/// Every variant is fatal; the pipeline never retries and never
/// produces a partial report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Dataset download or cache failure.
    #[error("dataset error: {0}")]
    Dataset(#[from] crate::dataset::DatasetError),

    /// Table loading failure.
    #[error("table error: {0}")]
    Table(#[from] crate::table::TableError),

    /// Catalog build or lookup failure, including unknown actor names.
    #[error("catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),
}
