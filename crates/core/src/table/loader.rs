//! Gzipped TSV loader.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use super::error::TableError;
use super::types::Relation;

/// The dataset's literal missing-value token.
const NULL_TOKEN: &str = "\\N";

/// Load a gzipped tab-separated table, keeping only `keep_columns`.
///
/// Every field is opaque text; `\N` becomes a missing value. Rows
/// shorter than the header are padded with missing values rather than
/// rejected. Quoting is disabled: the extracts embed raw quote
/// characters in title text.
pub fn load_table(path: &Path, keep_columns: &[&str]) -> Result<Relation, TableError> {
    info!("Loading {}", path.display());

    let file = File::open(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(GzDecoder::new(BufReader::new(file)));

    let headers = reader
        .headers()
        .map_err(|e| parse_error(path, e))?
        .clone();

    // Map each requested column to its first position in the header
    let mut source_indices = Vec::with_capacity(keep_columns.len());
    for &column in keep_columns {
        let position = headers.iter().position(|header| header == column).ok_or_else(|| {
            TableError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            }
        })?;
        source_indices.push(position);
    }

    let mut relation = Relation::new(keep_columns.iter().map(|c| c.to_string()).collect());
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        let row = source_indices
            .iter()
            .map(|&position| parse_field(record.get(position)))
            .collect();
        relation.push_row(row);
    }

    debug!("Loaded {} rows from {}", relation.len(), path.display());
    Ok(relation)
}

fn parse_field(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(value) if value != NULL_TOKEN => Some(value.to_string()),
        _ => None,
    }
}

fn parse_error(path: &Path, source: csv::Error) -> TableError {
    TableError::Parse {
        path: path.to_path_buf(),
        source,
    }
}
