//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that abort loading a catalog.
///
/// Only structural problems are errors here. An unparseable year is kept as
/// text on the record and never reaches this type.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be opened
    #[error("Failed to open catalog file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (malformed quoting, invalid UTF-8, I/O)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column every record needs
    #[error("Catalog header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A row ended before reaching a required column
    #[error("Row at line {line} is missing required field '{field}'")]
    MissingField { line: u64, field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
