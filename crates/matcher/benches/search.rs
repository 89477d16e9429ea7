//! Benchmarks for catalog search
//!
//! Run with: cargo bench --package matcher

use catalog::{Catalog, MovieRecord, Year, split_genres};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matcher::search;

const WORDS: [&str; 8] = [
    "night", "star", "return", "king", "shadow", "river", "empire", "dream",
];

fn synthetic_catalog(size: usize) -> Catalog {
    Catalog::from_records((0..size).map(|i| {
        let title = format!(
            "The {} of the {} {}",
            WORDS[i % WORDS.len()],
            WORDS[(i / 8) % WORDS.len()],
            i
        );
        MovieRecord::new(
            title,
            format!("Director {}", i % 50),
            Year::Known(1950 + (i % 70) as i32),
            split_genres("Drama | Thriller"),
        )
    }))
}

fn bench_search(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);

    c.bench_function("search_title_token", |b| {
        b.iter(|| black_box(search(black_box("shadow"), &catalog)))
    });

    c.bench_function("search_mixed_tokens", |b| {
        b.iter(|| black_box(search(black_box("empire dream director:\"Director 7\" year:1999"), &catalog)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
