//! Search and listing benchmark.
//!
//! Measures the in-memory search path (`SearchQuery::matches_note`) and the
//! pinned-first sort over note collections of increasing size.

use chrono::{Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use notekeeper_core::{Note, NoteId, SearchQuery, UserId, sort_pinned_first};
use rand::Rng;

const TITLES: &[&str] = &[
    "Water plants at 5",
    "Groceries",
    "Quarterly review notes",
    "Book club: chapter 3",
    "Call the plumber",
    "Ideas for the a.b* parser",
];

const TAGS: &[&str] = &["home", "work", "errands", "reading", "ideas"];

fn generate_notes(count: usize) -> Vec<Note> {
    let mut rng = rand::thread_rng();
    let owner = UserId::new();
    let start = Utc::now();

    (0..count)
        .map(|i| {
            let created = start + Duration::seconds(i as i64);
            Note {
                id: NoteId::new(),
                title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
                content: format!("Entry {} with some body text to scan through", i),
                tags: vec![TAGS[rng.gen_range(0..TAGS.len())].to_string()],
                is_pinned: rng.gen_bool(0.1),
                user_id: owner,
                created_on: created,
                updated_on: created,
            }
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_matching");

    for size in [100usize, 1_000, 10_000] {
        let notes = generate_notes(size);
        let query = SearchQuery::new("a.b*").unwrap();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("literal_metachar", size), &notes, |b, notes| {
            b.iter(|| {
                notes
                    .iter()
                    .filter(|n| query.matches_note(black_box(n)))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinned_first_sort");

    for size in [100usize, 1_000, 10_000] {
        let notes = generate_notes(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &notes, |b, notes| {
            b.iter(|| {
                let mut copy = notes.clone();
                sort_pinned_first(black_box(&mut copy));
                copy
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_sort);
criterion_main!(benches);
