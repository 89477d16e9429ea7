//! # Match Engine
//!
//! Scores every catalog record against a query and ranks the hits.
//!
//! ## Algorithm
//! 1. Tokenize the query (see [`crate::query`])
//! 2. For each record, count the tokens that match it:
//!    - field token: the record has the field and its value equals the
//!      token value, ignoring case
//!    - title token: `partial_ratio(token, lowercased title) >= 70`
//! 3. Keep records with a count above zero
//! 4. Stable sort by count, highest first

use std::rc::Rc;

use catalog::{Catalog, MovieRecord, SharedMovie};
use tracing::debug;

use crate::fuzzy::partial_ratio;
use crate::query::{QueryToken, tokenize};

/// Minimum partial ratio for a title token to count as a match.
pub const FUZZY_THRESHOLD: u8 = 70;

/// A ranked search hit.
///
/// `movie` is a shared handle into the catalog, not a copy.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    /// Number of query tokens that matched
    pub score: u32,
    pub movie: SharedMovie,
}

impl ScoredMatch {
    pub fn new(score: u32, movie: SharedMovie) -> Self {
        Self { score, movie }
    }
}

/// Rank catalog records against `query`, best matches first.
///
/// Records tied on score keep their catalog order. An empty query matches
/// nothing.
///
/// # Arguments
/// * `query` - Raw query text as typed
/// * `catalog` - Catalog to scan; every record is visited once
///
/// # Returns
/// Matches with a score above zero, highest score first. Each match holds
/// a clone of the catalog's `Rc`, so setting a rating on it is visible
/// through the catalog too.
pub fn search(query: &str, catalog: &Catalog) -> Vec<ScoredMatch> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    for token in &tokens {
        if let QueryToken::Field { field, .. } = token {
            if !catalog.is_known_field(field) {
                debug!("Unknown field '{}' in query, token will not match", field);
            }
        }
    }

    let mut results: Vec<ScoredMatch> = catalog
        .movies()
        .iter()
        .filter_map(|movie| {
            let score = score_record(&tokens, movie);
            (score > 0).then(|| ScoredMatch::new(score, Rc::clone(movie)))
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        "Query {:?}: {} tokens, {} matches",
        query,
        tokens.len(),
        results.len()
    );
    results
}

/// Number of `tokens` that match `movie`.
pub fn score_record(tokens: &[QueryToken], movie: &MovieRecord) -> u32 {
    let title = movie.title.to_lowercase();
    tokens
        .iter()
        .filter(|token| token_matches(token, movie, &title))
        .count() as u32
}

fn token_matches(token: &QueryToken, movie: &MovieRecord, lowered_title: &str) -> bool {
    match token {
        // Field tokens never fall back to the title
        QueryToken::Field { field, value } => movie
            .field(field)
            .is_some_and(|field_value| field_value.matches(value)),
        QueryToken::Title(text) => partial_ratio(text, lowered_title) >= FUZZY_THRESHOLD,
    }
}
