//! The in-memory catalog store.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::table::Relation;

use super::error::CatalogError;
use super::types::{
    columns, Filmography, PersonRecord, ACTING_CATEGORIES, MOVIE_TITLE_TYPE,
};

/// Identifier-keyed indexes over the four extracts.
///
/// Built once per run and read-only afterwards. Every lookup is a map
/// hit; nothing ever scans a relation after the build.
#[derive(Debug)]
pub struct Catalog {
    /// Name table rows, in dataset order.
    people: Vec<PersonRecord>,
    /// Display name to indices into `people`, preserving dataset order.
    people_by_name: HashMap<String, Vec<usize>>,
    /// Movie titles only: tconst to primary title text. The value is
    /// `None` when the title text itself is missing; the key still
    /// counts for joins.
    movies: HashMap<String, Option<String>>,
    /// Acting credits on movies, inverted: nconst to set of tconst.
    credits: HashMap<String, HashSet<String>>,
    /// Parsed ratings: tconst to average rating. Missing or unparsable
    /// ratings are simply absent.
    ratings: HashMap<String, f64>,
}

impl Catalog {
    /// Build the catalog from freshly loaded relations.
    ///
    /// Titles are pre-filtered to type "movie" and credits to acting
    /// categories on those movies, so downstream code never re-checks
    /// either condition.
    pub fn from_relations(
        names: &Relation,
        titles: &Relation,
        principals: &Relation,
        ratings: &Relation,
    ) -> Result<Self, CatalogError> {
        let people = collect_people(names)?;

        let mut people_by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, person) in people.iter().enumerate() {
            people_by_name
                .entry(person.name.clone())
                .or_default()
                .push(idx);
        }

        let movies = collect_movies(titles)?;
        let credits = collect_credits(principals, &movies)?;
        let ratings = collect_ratings(ratings)?;

        info!(
            "Catalog ready: {} people, {} movies, {} credited performers, {} rated titles",
            people.len(),
            movies.len(),
            credits.len(),
            ratings.len()
        );

        Ok(Self {
            people,
            people_by_name,
            movies,
            credits,
            ratings,
        })
    }

    /// Resolve a display name to exactly one person record.
    ///
    /// Exact, case-sensitive match. When several people share the name,
    /// the candidates narrow to performers when any exist. The winner is
    /// the first remaining row in dataset order; which person that is
    /// depends entirely on the order of the name table, not on
    /// prominence.
    pub fn resolve_person(&self, name: &str) -> Result<&PersonRecord, CatalogError> {
        let indices = self
            .people_by_name
            .get(name)
            .filter(|indices| !indices.is_empty())
            .ok_or_else(|| CatalogError::PersonNotFound(name.to_string()))?;

        let chosen = if indices.len() > 1 {
            indices
                .iter()
                .copied()
                .find(|&idx| self.people[idx].is_performer())
                .unwrap_or(indices[0])
        } else {
            indices[0]
        };

        let person = &self.people[chosen];
        debug!("Resolved '{}' to {}", name, person.nconst);
        Ok(person)
    }

    /// All movies the person has an acting credit on.
    ///
    /// Empty set for people without acting movie credits, including
    /// unknown identifiers.
    pub fn filmography(&self, nconst: &str) -> Filmography {
        self.credits.get(nconst).cloned().unwrap_or_default()
    }

    /// Average rating of a title, when one parsed.
    pub fn rating(&self, tconst: &str) -> Option<f64> {
        self.ratings.get(tconst).copied()
    }

    /// Primary title text of a movie, when known.
    pub fn movie_title(&self, tconst: &str) -> Option<&str> {
        self.movies.get(tconst).and_then(|title| title.as_deref())
    }

    /// Whether a title is in the movie working set.
    pub fn is_movie(&self, tconst: &str) -> bool {
        self.movies.contains_key(tconst)
    }
}

fn collect_people(names: &Relation) -> Result<Vec<PersonRecord>, CatalogError> {
    let id_col = column(names, columns::NCONST)?;
    let name_col = column(names, columns::PRIMARY_NAME)?;
    let profession_col = column(names, columns::PRIMARY_PROFESSION)?;

    let mut people = Vec::with_capacity(names.len());
    for row in names.rows() {
        // A row without an identifier or a display name can never match
        // a lookup
        let (Some(id), Some(name)) = (&row[id_col], &row[name_col]) else {
            continue;
        };
        people.push(PersonRecord {
            nconst: id.clone(),
            name: name.clone(),
            professions: row[profession_col].clone(),
        });
    }
    Ok(people)
}

fn collect_movies(
    titles: &Relation,
) -> Result<HashMap<String, Option<String>>, CatalogError> {
    let id_col = column(titles, columns::TCONST)?;
    let title_col = column(titles, columns::PRIMARY_TITLE)?;
    let type_col = column(titles, columns::TITLE_TYPE)?;

    let mut movies = HashMap::new();
    for row in titles.rows() {
        if row[type_col].as_deref() != Some(MOVIE_TITLE_TYPE) {
            continue;
        }
        let Some(id) = &row[id_col] else {
            continue;
        };
        movies.insert(id.clone(), row[title_col].clone());
    }
    Ok(movies)
}

fn collect_credits(
    principals: &Relation,
    movies: &HashMap<String, Option<String>>,
) -> Result<HashMap<String, HashSet<String>>, CatalogError> {
    let title_col = column(principals, columns::TCONST)?;
    let person_col = column(principals, columns::NCONST)?;
    let category_col = column(principals, columns::CATEGORY)?;

    let mut credits: HashMap<String, HashSet<String>> = HashMap::new();
    for row in principals.rows() {
        let (Some(tconst), Some(nconst), Some(category)) =
            (&row[title_col], &row[person_col], &row[category_col])
        else {
            continue;
        };
        if !ACTING_CATEGORIES.contains(&category.as_str()) {
            continue;
        }
        if !movies.contains_key(tconst) {
            continue;
        }
        credits
            .entry(nconst.clone())
            .or_default()
            .insert(tconst.clone());
    }
    Ok(credits)
}

fn collect_ratings(ratings: &Relation) -> Result<HashMap<String, f64>, CatalogError> {
    let id_col = column(ratings, columns::TCONST)?;
    let rating_col = column(ratings, columns::AVERAGE_RATING)?;

    let mut parsed = HashMap::new();
    for row in ratings.rows() {
        let Some(id) = &row[id_col] else {
            continue;
        };
        // Unparsable rating text counts as missing, not as an error
        let Some(value) = row[rating_col]
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
        else {
            continue;
        };
        parsed.insert(id.clone(), value);
    }
    Ok(parsed)
}

fn column(relation: &Relation, name: &str) -> Result<usize, CatalogError> {
    relation
        .column_index(name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}
