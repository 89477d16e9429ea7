//! Text rendering of result sets.

use std::io::{self, Write};

use catalog::format_rating;
use matcher::ScoredMatch;

/// Shown in place of a rating that was never fetched or could not be fetched.
pub const RATING_UNAVAILABLE: &str = "N/A";

/// Shown when a fresh or cached search has nothing to display.
pub const NO_MATCHES: &str = "No matches.";

/// One display line for a match.
///
/// `Inception, Director: Nolan, Year: 2010, Genre: Sci-Fi, Thriller, IMDB Rating: 8.8`
pub fn format_match(hit: &ScoredMatch) -> String {
    let movie = &hit.movie;
    let rating = movie
        .imdb_rating()
        .map(format_rating)
        .unwrap_or_else(|| RATING_UNAVAILABLE.to_string());

    format!(
        "{}, Director: {}, Year: {}, Genre: {}, IMDB Rating: {}",
        movie.title,
        movie.director,
        movie.year,
        movie.genre_list(),
        rating
    )
}

/// Write one line per match, in order.
pub fn write_matches<W: Write>(out: &mut W, matches: &[ScoredMatch]) -> io::Result<()> {
    for hit in matches {
        writeln!(out, "{}", format_match(hit))?;
    }
    Ok(())
}

/// Write a section header surrounded by blank lines.
pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}:\n", title)
}
