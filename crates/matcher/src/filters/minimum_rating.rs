//! Filter to enforce a minimum IMDb rating.
//!
//! Matches whose rating is unknown are dropped along with low-rated ones.

use crate::engine::ScoredMatch;
use crate::traits::Filter;
use anyhow::Result;

/// Keeps matches rated at or above `min_rating`.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, matches: Vec<ScoredMatch>) -> Result<Vec<ScoredMatch>> {
        let filtered = matches
            .into_iter()
            .filter(|m| {
                m.movie
                    .imdb_rating()
                    .is_some_and(|rating| rating >= self.min_rating)
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{MovieRecord, Year};
    use std::rc::Rc;

    fn rated(title: &str, score: u32, rating: Option<f64>) -> ScoredMatch {
        let movie = MovieRecord::new(title, "Someone", Year::Known(2000), vec![]);
        movie.set_imdb_rating(rating);
        ScoredMatch::new(score, Rc::new(movie))
    }

    #[test]
    fn test_minimum_rating_filter() {
        let matches = vec![
            rated("High", 3, Some(8.8)),
            rated("Unrated", 2, None),
            rated("Exact", 2, Some(7.5)),
            rated("Low", 1, Some(4.1)),
        ];

        let filter = MinimumRatingFilter::new(7.5);
        let filtered = filter.apply(matches).unwrap();

        let titles: Vec<&str> = filtered.iter().map(|m| m.movie.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "Exact"]);
        assert!(filtered.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_sees_rating_set_after_search() {
        let matches = vec![rated("Later", 1, None)];
        matches[0].movie.set_imdb_rating(Some(9.0));

        let filtered = MinimumRatingFilter::new(8.0).apply(matches).unwrap();
        assert_eq!(filtered.len(), 1);
    }
}
