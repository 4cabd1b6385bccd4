//! Gzipped TSV table loading.
//!
//! Each IMDb extract is a gzip-compressed tab-separated table with a
//! header row and the literal token `\N` for missing values. The loader
//! materializes a column subset fully in memory, treating every field as
//! opaque text. No row filtering happens here; that is the caller's job.

mod error;
mod loader;
mod types;

pub use error::TableError;
pub use loader::load_table;
pub use types::Relation;
