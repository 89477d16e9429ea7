//! # Search Session
//!
//! Owns everything that lives for one interactive run: the catalog, the
//! rating source, the per-query cache and the search history.
//!
//! One input line at a time:
//! 1. `exit` (any case) ends the session
//! 2. `last` (any case) replays the history
//! 3. a query seen before (exact, case-sensitive) is served from the cache
//! 4. anything else is searched, rated, cached and recorded
//!
//! Cache and history hold the same `Rc` result sets, and those hold shared
//! catalog records. A rating fetched for a movie under one query is
//! therefore also what earlier cached sets show for it.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use catalog::Catalog;
use matcher::{FilterPipeline, ScoredMatch, search};
use ratings::RatingSource;

use crate::render::{NO_MATCHES, write_header, write_matches};

/// Ranked matches for one query, shared between cache and history.
pub type ResultSet = Rc<Vec<ScoredMatch>>;

pub const NO_HISTORY: &str = "No previous searches.";

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Last,
    /// Raw query, untouched; it doubles as the cache key
    Search(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(input: &'a str) -> Self {
        match input.to_lowercase().as_str() {
            "exit" => Command::Exit,
            "last" => Command::Last,
            _ => Command::Search(input),
        }
    }
}

pub struct SearchSession<R> {
    catalog: Catalog,
    rating_source: R,
    filters: FilterPipeline,
    cache: HashMap<String, ResultSet>,
    history: Vec<ResultSet>,
}

impl<R: RatingSource> SearchSession<R> {
    pub fn new(catalog: Catalog, rating_source: R) -> Self {
        Self {
            catalog,
            rating_source,
            filters: FilterPipeline::new(),
            cache: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Filters applied whenever results are displayed.
    ///
    /// Cache and history always keep the unfiltered results.
    pub fn with_filters(mut self, filters: FilterPipeline) -> Self {
        self.filters = filters;
        self
    }

    /// Handle one input line, writing any output to `out`.
    ///
    /// # Arguments
    /// * `input` - The line as read, without its trailing newline
    /// * `out` - Where results and messages are written
    ///
    /// # Returns
    /// * `Ok(Control::Exit)` - The line was `exit`; nothing was written
    /// * `Ok(Control::Continue)` - Anything else
    /// * `Err` - Writing to `out` failed
    pub async fn handle<W: Write>(&mut self, input: &str, out: &mut W) -> Result<Control> {
        match Command::parse(input) {
            Command::Exit => return Ok(Control::Exit),
            Command::Last => self.show_history(out)?,
            Command::Search(query) => {
                if let Some(results) = self.cache.get(query).cloned() {
                    debug!("Cache hit for {:?}", query);
                    self.show("Results from cache", &results, out)?;
                } else {
                    let results = self.run_search(query).await;
                    self.show("Results", &results, out)?;
                }
            }
        }
        Ok(Control::Continue)
    }

    /// Search, fetch a rating for every hit, then cache and record the set.
    async fn run_search(&mut self, query: &str) -> ResultSet {
        let results = search(query, &self.catalog);

        for hit in &results {
            let rating = self.rating_source.fetch(&hit.movie.title).await;
            hit.movie.set_imdb_rating(rating);
        }
        info!("Search {:?} found {} movies", query, results.len());

        let results = Rc::new(results);
        self.cache.insert(query.to_string(), Rc::clone(&results));
        self.history.push(Rc::clone(&results));
        results
    }

    fn show<W: Write>(&self, header: &str, results: &[ScoredMatch], out: &mut W) -> Result<()> {
        let shown = self.filters.apply(results.to_vec())?;

        write_header(out, header).context("Failed to write results")?;
        if shown.is_empty() {
            writeln!(out, "{}", NO_MATCHES).context("Failed to write results")?;
        } else {
            write_matches(out, &shown).context("Failed to write results")?;
        }
        Ok(())
    }

    fn show_history<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.history.is_empty() {
            writeln!(out, "{}", NO_HISTORY).context("Failed to write history")?;
            return Ok(());
        }

        write_header(out, "Search History").context("Failed to write history")?;
        for results in &self.history {
            let shown = self.filters.apply(results.to_vec())?;
            write_matches(out, &shown).context("Failed to write history")?;
        }
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rating_source(&self) -> &R {
        &self.rating_source
    }

    /// Result sets of every novel search, oldest first
    pub fn history(&self) -> &[ResultSet] {
        &self.history
    }

    pub fn cached(&self, query: &str) -> Option<&ResultSet> {
        self.cache.get(query)
    }
}
