//! Together/solo set arithmetic and rating aggregation.

mod aggregate;
mod partition;

pub use aggregate::{summarize, RatingSummary};
pub use partition::{partition, FilmographyPartition};
