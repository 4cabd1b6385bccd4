//! Mean rating over a set of titles.

use crate::catalog::{Catalog, Filmography};

/// Rating statistics over one title set.
///
/// `mean` is `None` when no member has a usable rating; a literal zero
/// would be indistinguishable from a real bottom-of-the-scale average.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    /// Unweighted arithmetic mean over members with a parsed rating.
    pub mean: Option<f64>,
    /// How many members contributed to the mean.
    pub rated_count: usize,
    /// Primary titles of the members, for display. Unsorted.
    pub titles: Vec<String>,
}

impl RatingSummary {
    /// The summary of an empty title set.
    pub fn empty() -> Self {
        Self {
            mean: None,
            rated_count: 0,
            titles: Vec::new(),
        }
    }

    pub fn has_ratings(&self) -> bool {
        self.rated_count > 0
    }
}

/// Compute the rating summary for a title set against the catalog.
///
/// Members without a rating are skipped; the title list still includes
/// them. Vote counts never weight the mean.
pub fn summarize(catalog: &Catalog, titles: &Filmography) -> RatingSummary {
    if titles.is_empty() {
        return RatingSummary::empty();
    }

    let mut names = Vec::new();
    let mut sum = 0.0;
    let mut rated_count = 0usize;

    for tconst in titles {
        if let Some(name) = catalog.movie_title(tconst) {
            names.push(name.to_string());
        }
        if let Some(rating) = catalog.rating(tconst) {
            sum += rating;
            rated_count += 1;
        }
    }

    let mean = (rated_count > 0).then(|| sum / rated_count as f64);

    RatingSummary {
        mean,
        rated_count,
        titles: names,
    }
}
