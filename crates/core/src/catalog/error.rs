//! Error types for the catalog.

use thiserror::Error;

/// Errors from building or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No person row matches the queried display name.
    #[error("Actor '{0}' not found in the name table")]
    PersonNotFound(String),

    /// A relation is missing a column the catalog needs.
    #[error("Relation is missing required column '{0}'")]
    MissingColumn(String),
}
