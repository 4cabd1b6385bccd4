//! Partitioning of two filmographies.

use crate::catalog::Filmography;

/// The three pairwise-disjoint slices of two filmographies.
///
/// `both ∪ only_first ∪ only_second` equals the union of the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmographyPartition {
    /// Titles both people are credited on.
    pub both: Filmography,
    /// Titles only the first person is credited on.
    pub only_first: Filmography,
    /// Titles only the second person is credited on.
    pub only_second: Filmography,
}

/// Split two filmographies into together and exclusive sets.
pub fn partition(first: &Filmography, second: &Filmography) -> FilmographyPartition {
    let both: Filmography = first.intersection(second).cloned().collect();
    let only_first = first.difference(&both).cloned().collect();
    let only_second = second.difference(&both).cloned().collect();

    FilmographyPartition {
        both,
        only_first,
        only_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(titles: &[&str]) -> Filmography {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_partition_basic() {
        let first = set(&["tt1", "tt2"]);
        let second = set(&["tt2", "tt3"]);

        let split = partition(&first, &second);
        assert_eq!(split.both, set(&["tt2"]));
        assert_eq!(split.only_first, set(&["tt1"]));
        assert_eq!(split.only_second, set(&["tt3"]));
    }

    #[test]
    fn test_partition_disjoint_inputs() {
        let split = partition(&set(&["tt1"]), &set(&["tt2"]));
        assert!(split.both.is_empty());
        assert_eq!(split.only_first, set(&["tt1"]));
        assert_eq!(split.only_second, set(&["tt2"]));
    }

    #[test]
    fn test_partition_identical_inputs() {
        let movies = set(&["tt1", "tt2"]);
        let split = partition(&movies, &movies);
        assert_eq!(split.both, movies);
        assert!(split.only_first.is_empty());
        assert!(split.only_second.is_empty());
    }

    #[test]
    fn test_partition_empty_inputs() {
        let split = partition(&Filmography::new(), &Filmography::new());
        assert!(split.both.is_empty());
        assert!(split.only_first.is_empty());
        assert!(split.only_second.is_empty());
    }

    #[test]
    fn test_partition_slices_are_disjoint_and_cover_union() {
        let first = set(&["tt1", "tt2", "tt3", "tt4"]);
        let second = set(&["tt3", "tt4", "tt5"]);

        let split = partition(&first, &second);

        assert!(split.both.is_disjoint(&split.only_first));
        assert!(split.both.is_disjoint(&split.only_second));
        assert!(split.only_first.is_disjoint(&split.only_second));

        let union: Filmography = split
            .both
            .iter()
            .chain(&split.only_first)
            .chain(&split.only_second)
            .cloned()
            .collect();
        let expected: Filmography = first.union(&second).cloned().collect();
        assert_eq!(union, expected);
    }
}
