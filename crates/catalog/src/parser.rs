//! Parser for CSV catalog files.
//!
//! Format: a header row naming the columns, then one movie per row. The
//! `title`, `director`, `year` and `genre` columns are required; any other
//! columns are carried along as extra text fields.
//!
//! ```text
//! title,director,year,genre
//! Inception,Christopher Nolan,2010,Sci-Fi | Thriller
//! ```

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Positions of the required columns within the header.
struct ColumnIndex {
    title: usize,
    director: usize,
    year: usize,
    genre: usize,
    /// (position, name) of every other column
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn from_header(columns: &[String]) -> Result<Self> {
        let find = |column: &'static str| {
            columns
                .iter()
                .position(|c| c == column)
                .ok_or(CatalogError::MissingColumn { column })
        };

        let extra = columns
            .iter()
            .enumerate()
            .filter(|(_, name)| !REQUIRED_COLUMNS.contains(&name.as_str()))
            .map(|(idx, name)| (idx, name.clone()))
            .collect();

        Ok(Self {
            title: find(TITLE)?,
            director: find(DIRECTOR)?,
            year: find(YEAR)?,
            genre: find(GENRE)?,
            extra,
        })
    }
}

/// Load a catalog from a CSV file on disk.
///
/// # Arguments
/// * `path` - Path to a UTF-8 CSV file with a header row
///
/// # Returns
/// * `Ok(Catalog)` - Every row, in file order
/// * `Err(CatalogError::Open)` - The file could not be opened
/// * `Err(..)` - Any error from [`from_reader`]
pub fn load(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = from_reader(file)?;
    tracing::info!("Loaded {} movies from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse a catalog from any CSV source.
///
/// A single row missing a required field aborts the whole load.
///
/// Rust concept: taking `R: Read` instead of a path lets tests feed
/// `&[u8]` literals through the same code the binary uses for files.
pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            // Spreadsheet exports often lead with a UTF-8 byte-order mark
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    let index = ColumnIndex::from_header(&columns)?;
    let mut catalog = Catalog::with_columns(columns);

    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let cell = |idx: usize, field: &'static str| {
            row.get(idx).ok_or(CatalogError::MissingField { line, field })
        };

        let mut record = MovieRecord::new(
            cell(index.title, TITLE)?,
            cell(index.director, DIRECTOR)?,
            Year::parse(cell(index.year, YEAR)?),
            split_genres(cell(index.genre, GENRE)?),
        );

        for (idx, name) in &index.extra {
            if let Some(value) = row.get(*idx) {
                record = record.with_extra(name.clone(), value);
            }
        }

        if let Year::Raw(text) = &record.year {
            tracing::debug!("Line {}: keeping non-numeric year {:?}", line, text);
        }

        catalog.push(record);
    }

    Ok(catalog)
}
