//! Core domain types for the movie catalog.
//!
//! A catalog is loaded once and never changes shape. Records are handed out
//! as [`SharedMovie`] handles so that every search result, cache entry and
//! history entry that mentions a movie points at the same instance.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Field names
// =============================================================================

pub const TITLE: &str = "title";
pub const DIRECTOR: &str = "director";
pub const YEAR: &str = "year";
pub const GENRE: &str = "genre";
pub const IMDB_RATING: &str = "imdb_rating";

/// Columns every catalog source must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [TITLE, DIRECTOR, YEAR, GENRE];

/// Literal separator between genres in the `genre` column.
pub const GENRE_SEPARATOR: &str = " | ";

/// Shared handle to a catalog record.
///
/// The rating lives in a `Cell` inside the record, so setting it through any
/// handle is visible through all of them. A rating fetched for a later query
/// therefore also shows up when an earlier cached result set is rendered.
pub type SharedMovie = Rc<MovieRecord>;

// =============================================================================
// Year
// =============================================================================

/// Release year, parsed best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Year {
    Known(i32),
    /// The cell did not hold an integer; original text kept as-is
    Raw(String),
}

impl Year {
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<i32>() {
            Ok(year) => Year::Known(year),
            Err(_) => Year::Raw(s.to_string()),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{}", year),
            Year::Raw(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// MovieRecord
// =============================================================================

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub year: Year,
    /// Genres in source order, split on [`GENRE_SEPARATOR`]
    pub genre: Vec<String>,
    /// Any other columns of the source, in header order
    pub extra: Vec<(String, String)>,
    /// Rust concept: `Cell<T>` gives interior mutability for `Copy` values,
    /// so the rating can be set through a shared `&MovieRecord` (and thus
    /// through an `Rc`) without `&mut` access or a runtime borrow check
    imdb_rating: Cell<Option<f64>>,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: Year,
        genre: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            genre,
            extra: Vec::new(),
            imdb_rating: Cell::new(None),
        }
    }

    /// Attach an extra (non-required) column value.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Rating fetched for this movie, if any fetch has succeeded yet.
    pub fn imdb_rating(&self) -> Option<f64> {
        self.imdb_rating.get()
    }

    /// Record the outcome of a rating fetch.
    ///
    /// `None` overwrites an earlier rating, matching a fetch that failed this
    /// time around.
    pub fn set_imdb_rating(&self, rating: Option<f64>) {
        self.imdb_rating.set(rating);
    }

    /// Genres joined for display: "Sci-Fi, Thriller"
    pub fn genre_list(&self) -> String {
        self.genre.join(", ")
    }

    /// Look up a field by name.
    ///
    /// This is the only way query tokens reach record data. Names outside
    /// the known fields (the required columns, `imdb_rating`, and the extra
    /// columns of this record) return `None`. `imdb_rating` is `None` until
    /// a rating has been set.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            TITLE => Some(FieldValue::Text(&self.title)),
            DIRECTOR => Some(FieldValue::Text(&self.director)),
            YEAR => Some(FieldValue::Year(&self.year)),
            GENRE => Some(FieldValue::Genres(&self.genre)),
            IMDB_RATING => self.imdb_rating().map(FieldValue::Rating),
            _ => self
                .extra
                .iter()
                .find(|(column, _)| column == name)
                .map(|(_, value)| FieldValue::Text(value)),
        }
    }
}

/// Borrowed view of a single field, as returned by [`MovieRecord::field`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Year(&'a Year),
    Genres(&'a [String]),
    Rating(f64),
}

impl FieldValue<'_> {
    /// Case-insensitive equality against a query value.
    ///
    /// Genres match when any single genre equals `value`. Ratings compare
    /// their decimal text, so `8.0` is written `8.0`, not `8`.
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            FieldValue::Text(text) => text.to_lowercase() == value,
            FieldValue::Year(year) => year.to_string().to_lowercase() == value,
            FieldValue::Genres(genres) => genres.iter().any(|g| g.to_lowercase() == value),
            FieldValue::Rating(rating) => format_rating(*rating) == value,
        }
    }
}

/// Display form of a rating: always carries a decimal point.
pub fn format_rating(rating: f64) -> String {
    format!("{:?}", rating)
}

/// Split a raw `genre` cell into trimmed genres.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(GENRE_SEPARATOR)
        .map(|g| g.trim().to_string())
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// The loaded catalog: header columns plus records in source order.
///
/// Always carries its header columns; they decide which `field:value`
/// names are recognized.
#[derive(Debug)]
pub struct Catalog {
    columns: Vec<String>,
    movies: Vec<SharedMovie>,
}

impl Catalog {
    /// Build a catalog from records, using just the required columns as the header.
    pub fn from_records(records: impl IntoIterator<Item = MovieRecord>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            movies: records.into_iter().map(Rc::new).collect(),
        }
    }

    pub(crate) fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            movies: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: MovieRecord) {
        self.movies.push(Rc::new(record));
    }

    /// Header column names, in source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether `name` is a field this catalog's records can answer for.
    pub fn is_known_field(&self, name: &str) -> bool {
        name == IMDB_RATING || self.columns.iter().any(|c| c == name)
    }

    pub fn movies(&self) -> &[SharedMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
