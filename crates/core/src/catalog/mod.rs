//! In-memory catalog over the four extracts.
//!
//! The catalog is built once per run from the loaded relations and
//! answers every downstream question through identifier-keyed indexes
//! instead of repeated table scans: display name to person, person to
//! acting movie credits, title to rating and primary title text.

mod error;
mod memory;
mod types;

pub use error::CatalogError;
pub use memory::Catalog;
pub use types::{
    columns, Filmography, PersonRecord, ACTING_CATEGORIES, MOVIE_TITLE_TYPE, NAME_COLUMNS,
    PRINCIPAL_COLUMNS, RATING_COLUMNS, TITLE_COLUMNS,
};
