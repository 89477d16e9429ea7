//! Core traits for post-search filtering.
//!
//! Filters run over a ranked result set after ratings are known, so they
//! can reason about anything on the record, including the fetched rating.

use anyhow::Result;

use crate::engine::ScoredMatch;

/// Core trait for filtering ranked matches.
///
/// Filters take ownership of the matches and return the survivors. They
/// must not reorder what they keep.
pub trait Filter {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a ranked set of matches.
    fn apply(&self, matches: Vec<ScoredMatch>) -> Result<Vec<ScoredMatch>>;
}
