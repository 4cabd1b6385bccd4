//! Dataset acquisition and local caching.
//!
//! The comparison needs four IMDb extracts. The cache guarantees they
//! exist locally, fetching missing ones from the configured base URL.
//! Caching is purely presence-based: an existing file is trusted as-is,
//! never re-validated or re-downloaded. Any download or filesystem
//! failure is fatal; there are no retries.

mod cache;
mod error;
mod http;
mod traits;
mod types;

pub use cache::DatasetCache;
pub use error::DatasetError;
pub use http::HttpFetcher;
pub use traits::DatasetFetcher;
pub use types::{Dataset, DatasetPaths};
