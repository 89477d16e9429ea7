//! # Catalog Crate
//!
//! Loads the movie catalog from a CSV file into memory.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Year`, `FieldValue` and the `Catalog` itself
//! - **parser**: CSV parsing with required-column checks
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = catalog::load(Path::new("movies.csv"))?;
//! for movie in catalog.movies() {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use parser::{from_reader, load};
pub use types::{
    Catalog, FieldValue, MovieRecord, SharedMovie, Year, format_rating, split_genres,
};
