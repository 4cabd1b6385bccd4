//! The comparison pipeline.
//!
//! Drives one full run, strictly in order: ensure the dataset cache,
//! load the four relations, build the catalog, resolve both actors,
//! partition their filmographies, aggregate ratings per slice. The
//! result is a [`ComparisonReport`] for a renderer to consume.

mod error;
mod runner;
mod types;

pub use error::PipelineError;
pub use runner::ComparisonRunner;
pub use types::{ActorSummary, ComparisonReport, Verdict};
