//! Testing utilities and mock implementations.
//!
//! Provides a mock dataset fetcher and gzipped-TSV fixtures so the full
//! pipeline can run in tests without touching the network or the real
//! multi-gigabyte extracts.

mod mock_fetcher;

pub use mock_fetcher::{MockFetcher, RecordedFetch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    /// Gzip a TSV table given as complete lines (header first).
    pub fn gzip_tsv(lines: &[&str]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for line in lines {
            encoder.write_all(line.as_bytes()).unwrap();
            encoder.write_all(b"\n").unwrap();
        }
        encoder.finish().unwrap()
    }

    /// Name table of the synthetic mini-dataset: two performers plus a
    /// same-named director to exercise resolution.
    pub fn mini_name_basics() -> Vec<u8> {
        gzip_tsv(&[
            "nconst\tprimaryName\tprimaryProfession",
            "nm0000010\tJane Doe\tdirector,writer",
            "nm0000011\tJane Doe\tactress,producer",
            "nm0000012\tJohn Roe\tactor",
        ])
    }

    /// Title table: three movies and one series that must be ignored.
    pub fn mini_title_basics() -> Vec<u8> {
        gzip_tsv(&[
            "tconst\tprimaryTitle\ttitleType",
            "tt0000001\tSolo Outing\tmovie",
            "tt0000002\tJoint Venture\tmovie",
            "tt0000003\tOther Plans\tmovie",
            "tt0000004\tEndless Show\ttvSeries",
        ])
    }

    /// Credits: Jane in movies 1 and 2, John in movies 2 and 3. The
    /// director credit and the series credit must both be filtered out.
    pub fn mini_title_principals() -> Vec<u8> {
        gzip_tsv(&[
            "tconst\tnconst\tcategory",
            "tt0000001\tnm0000011\tactress",
            "tt0000002\tnm0000011\tactress",
            "tt0000002\tnm0000012\tactor",
            "tt0000003\tnm0000012\tactor",
            "tt0000001\tnm0000010\tdirector",
            "tt0000004\tnm0000012\tactor",
        ])
    }

    /// Ratings: 8.0 / 6.0 / 4.0 for the three movies.
    pub fn mini_title_ratings() -> Vec<u8> {
        gzip_tsv(&[
            "tconst\taverageRating\tnumVotes",
            "tt0000001\t8.0\t1200",
            "tt0000002\t6.0\t800",
            "tt0000003\t4.0\t150",
        ])
    }

    /// All four extracts keyed by remote file name, ready for a
    /// [`MockFetcher`](super::MockFetcher).
    pub fn mini_dataset() -> Vec<(&'static str, Vec<u8>)> {
        vec![
            ("name.basics.tsv.gz", mini_name_basics()),
            ("title.basics.tsv.gz", mini_title_basics()),
            ("title.principals.tsv.gz", mini_title_principals()),
            ("title.ratings.tsv.gz", mini_title_ratings()),
        ]
    }
}
