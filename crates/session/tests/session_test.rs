//! Integration tests for the search session.
//!
//! The rating source is faked so every lookup is counted and answered from
//! a fixed table.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use catalog::{Catalog, MovieRecord, Year, split_genres};
use matcher::FilterPipeline;
use matcher::filters::MinimumRatingFilter;
use ratings::RatingSource;
use session::{Control, NO_HISTORY, SearchSession};

#[derive(Default)]
struct FakeRatings {
    ratings: RefCell<HashMap<String, f64>>,
    calls: Cell<usize>,
}

impl FakeRatings {
    fn with(entries: &[(&str, f64)]) -> Self {
        let fake = Self::default();
        for (title, rating) in entries {
            fake.ratings.borrow_mut().insert(title.to_string(), *rating);
        }
        fake
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RatingSource for FakeRatings {
    async fn fetch(&self, title: &str) -> Option<f64> {
        self.calls.set(self.calls.get() + 1);
        self.ratings.borrow().get(title).copied()
    }
}

fn movie(title: &str, director: &str, year: i32, genre: &str) -> MovieRecord {
    MovieRecord::new(title, director, Year::Known(year), split_genres(genre))
}

fn inception_catalog() -> Catalog {
    Catalog::from_records([movie("Inception", "Nolan", 2010, "Sci-Fi | Thriller")])
}

fn nolan_catalog() -> Catalog {
    Catalog::from_records([
        movie("Inception", "Nolan", 2010, "Sci-Fi | Thriller"),
        movie("Memento", "Nolan", 2000, "Mystery | Thriller"),
        movie("Heat", "Mann", 1995, "Crime | Drama"),
    ])
}

async fn run<R: RatingSource>(session: &mut SearchSession<R>, input: &str) -> (Control, String) {
    let mut out = Vec::new();
    let control = session.handle(input, &mut out).await.unwrap();
    (control, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_exit_in_any_case() {
    for input in ["exit", "EXIT", "eXiT"] {
        let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());
        let (control, output) = run(&mut session, input).await;

        assert_eq!(control, Control::Exit);
        assert!(output.is_empty());
        assert_eq!(session.rating_source().calls(), 0);
    }
}

#[tokio::test]
async fn test_last_with_empty_history() {
    let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());
    let (control, output) = run(&mut session, "LAST").await;

    assert_eq!(control, Control::Continue);
    assert_eq!(output.trim(), NO_HISTORY);
}

#[tokio::test]
async fn test_new_search_fetches_ratings() {
    let ratings = FakeRatings::with(&[("Inception", 8.8)]);
    let mut session = SearchSession::new(inception_catalog(), ratings);

    let (control, output) = run(&mut session, "director:Nolan").await;
    assert_eq!(control, Control::Continue);
    assert!(output.contains("Results:"));
    assert!(output.contains(
        "Inception, Director: Nolan, Year: 2010, Genre: Sci-Fi, Thriller, IMDB Rating: 8.8"
    ));
    assert_eq!(session.rating_source().calls(), 1);

    let cached = session.cached("director:Nolan").unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].score, 1);
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_repeat_query_served_from_cache() {
    let ratings = FakeRatings::with(&[("Inception", 8.8), ("Memento", 8.4)]);
    let mut session = SearchSession::new(nolan_catalog(), ratings);

    run(&mut session, "director:nolan").await;
    assert_eq!(session.rating_source().calls(), 2);

    let (_, output) = run(&mut session, "director:nolan").await;
    assert!(output.contains("Results from cache:"));
    assert!(output.contains("Memento"));
    assert_eq!(session.rating_source().calls(), 2);
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_cache_key_is_exact() {
    let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());

    run(&mut session, "incep").await;
    run(&mut session, "INCEP").await;
    run(&mut session, "incep ").await;

    // Each spelling is a novel search
    assert_eq!(session.rating_source().calls(), 3);
    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn test_cache_and_history_share_result_sets() {
    let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());
    run(&mut session, "incep").await;

    let cached = session.cached("incep").unwrap();
    assert!(Rc::ptr_eq(cached, &session.history()[0]));
    assert!(Rc::ptr_eq(&cached[0].movie, &session.catalog().movies()[0]));
}

#[tokio::test]
async fn test_later_fetch_updates_earlier_cached_results() {
    let ratings = FakeRatings::with(&[("Inception", 8.8)]);
    let mut session = SearchSession::new(inception_catalog(), ratings);

    run(&mut session, "incep").await;
    session
        .rating_source()
        .ratings
        .borrow_mut()
        .insert("Inception".to_string(), 9.1);
    run(&mut session, "director:nolan").await;

    let (_, output) = run(&mut session, "incep").await;
    assert!(output.contains("Results from cache:"));
    assert!(output.contains("IMDB Rating: 9.1"));
}

#[tokio::test]
async fn test_unavailable_rating_marker() {
    let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());
    let (_, output) = run(&mut session, "incep").await;
    assert!(output.contains("IMDB Rating: N/A"));
}

#[tokio::test]
async fn test_no_matches() {
    let mut session = SearchSession::new(inception_catalog(), FakeRatings::default());
    let (control, output) = run(&mut session, "").await;

    assert_eq!(control, Control::Continue);
    assert!(output.contains("No matches."));
    assert_eq!(session.rating_source().calls(), 0);
    // An empty search still counts as a novel search
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_last_replays_history_in_order() {
    let mut session = SearchSession::new(nolan_catalog(), FakeRatings::default());
    run(&mut session, "heat").await;
    run(&mut session, "memento").await;

    let (control, output) = run(&mut session, "last").await;
    assert_eq!(control, Control::Continue);
    assert!(output.contains("Search History:"));

    let heat = output.find("Heat, Director").unwrap();
    let memento = output.find("Memento, Director").unwrap();
    assert!(heat < memento);
    assert_eq!(session.rating_source().calls(), 2);
}

#[tokio::test]
async fn test_rating_filter_applies_to_display_only() {
    let ratings = FakeRatings::with(&[("Inception", 8.8), ("Memento", 6.0)]);
    let filters = FilterPipeline::new().add_filter(MinimumRatingFilter::new(7.0));
    let mut session = SearchSession::new(nolan_catalog(), ratings).with_filters(filters);

    let (_, output) = run(&mut session, "director:nolan").await;
    assert!(output.contains("Inception"));
    assert!(!output.contains("Memento"));

    // The cache keeps the unfiltered set
    assert_eq!(session.cached("director:nolan").unwrap().len(), 2);

    let (_, output) = run(&mut session, "last").await;
    assert!(!output.contains("Memento"));
}
