//! Filter implementations for the result pipeline.

pub mod minimum_rating;

// Re-export for convenience
pub use minimum_rating::MinimumRatingFilter;
