//! Result types of a comparison run.

use crate::compare::RatingSummary;

/// One resolved actor and the size of their movie filmography.
#[derive(Debug, Clone)]
pub struct ActorSummary {
    /// Display name, as configured.
    pub name: String,
    /// Resolved canonical identifier.
    pub nconst: String,
    /// Movies with an acting credit, shared and solo together.
    pub movie_count: usize,
}

/// Qualitative relation of the together average to both solo averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Together strictly above both solo averages.
    Higher,
    /// Together strictly below both solo averages.
    Lower,
    /// Anything in between.
    Mixed,
}

/// Everything a report renderer needs about one comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub first: ActorSummary,
    pub second: ActorSummary,
    /// Number of movies the actors share.
    pub shared_count: usize,
    /// Ratings over the shared movies.
    pub together: RatingSummary,
    /// Ratings over movies only the first actor appears in.
    pub first_solo: RatingSummary,
    /// Ratings over movies only the second actor appears in.
    pub second_solo: RatingSummary,
}

impl ComparisonReport {
    /// Compare the together average against both solo averages.
    ///
    /// `None` unless all three slices have at least one rated movie;
    /// comparing against fabricated zeros would say nothing.
    pub fn verdict(&self) -> Option<Verdict> {
        let together = self.together.mean?;
        let first = self.first_solo.mean?;
        let second = self.second_solo.mean?;

        let verdict = if together > first && together > second {
            Verdict::Higher
        } else if together < first && together < second {
            Verdict::Lower
        } else {
            Verdict::Mixed
        };
        Some(verdict)
    }

    /// Signed differences of the together mean from each solo mean.
    pub fn solo_deltas(&self) -> (Option<f64>, Option<f64>) {
        let delta = |solo: Option<f64>| Some(self.together.mean? - solo?);
        (delta(self.first_solo.mean), delta(self.second_solo.mean))
    }
}
