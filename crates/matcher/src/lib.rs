//! # Matcher Crate
//!
//! Query matching and ranking over a loaded catalog.
//!
//! ## Components
//!
//! - **query**: splits a raw query into field tokens and title tokens
//! - **fuzzy**: 0-100 partial similarity used for title tokens
//! - **engine**: scores records and ranks them (`search`)
//! - **filters** / **filter_pipeline**: post-search filters such as a
//!   minimum IMDb rating
//!
//! ## Example Usage
//!
//! ```ignore
//! use matcher::search;
//!
//! let catalog = catalog::load(Path::new("movies.csv"))?;
//! for hit in search("director:Nolan incep", &catalog) {
//!     println!("{} ({})", hit.movie.title, hit.score);
//! }
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod fuzzy;
pub mod query;
pub mod traits;

// Re-export main types
pub use engine::{FUZZY_THRESHOLD, ScoredMatch, score_record, search};
pub use filter_pipeline::FilterPipeline;
pub use query::{QueryToken, tokenize};
pub use traits::Filter;
