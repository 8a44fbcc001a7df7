// Criterion benchmarks for Babyname Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use babyname_match::core::{normalize_batch, Matcher};
use babyname_match::models::Role;
use babyname_match::services::{MemoryRepository, Repository};
use std::sync::Arc;

fn create_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Name {}", i)).collect()
}

/// Catalog where mom has judged every third name and both like every fifth
fn seeded_repository(count: usize) -> Arc<MemoryRepository> {
    let repo = Arc::new(MemoryRepository::new());
    let names = create_names(count);

    tokio_test::block_on(async {
        repo.import_names(&names).await.unwrap();
        for (i, name) in names.iter().enumerate() {
            if i % 5 == 0 {
                repo.like(Role::Mom, name).await.unwrap();
                repo.like(Role::Dad, name).await.unwrap();
            } else if i % 3 == 0 {
                repo.dislike(Role::Mom, name).await.unwrap();
            }
        }
    });

    repo
}

fn bench_normalize_batch(c: &mut Criterion) {
    let raw: Vec<String> = (0..1000)
        .map(|i| format!("  Mary   Kate {}  ", i % 700))
        .collect();

    c.bench_function("normalize_batch_1000", |b| {
        b.iter(|| normalize_batch(black_box(&raw)));
    });
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for count in [100, 1000, 10000].iter() {
        let repo = seeded_repository(*count);

        group.bench_with_input(BenchmarkId::new("next_queued_name", count), count, |b, _| {
            b.iter(|| tokio_test::block_on(repo.next_queued_name(black_box(Role::Mom))));
        });

        group.bench_with_input(BenchmarkId::new("stats", count), count, |b, _| {
            b.iter(|| tokio_test::block_on(repo.stats(black_box(Role::Dad))));
        });
    }

    group.finish();
}

fn bench_next_for(c: &mut Criterion) {
    // Matches are acknowledged once, so pre-drain them and measure the queue path
    let repo = seeded_repository(1000);
    let matcher = Matcher::new(repo.clone());
    tokio_test::block_on(async {
        while repo.next_unseen_match(Role::Mom).await.unwrap().is_some() {}
    });

    c.bench_function("next_for_1000", |b| {
        b.iter(|| tokio_test::block_on(matcher.next_for(black_box(Role::Mom))));
    });
}

criterion_group!(benches, bench_normalize_batch, bench_queue, bench_next_for);

criterion_main!(benches);
