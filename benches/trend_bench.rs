//! Performance benchmarks for the mood log.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Trend aggregation at various history sizes
//! - Appending a check-in to an on-disk log
//! - Listing a user's history

use aiva::db::{Database, MoodStore};
use aiva::session::UserId;
use aiva::trend::aggregate_moods;
use aiva::Mood;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

fn open_bench_db(temp_dir: &TempDir) -> Database {
    let db = Database::open(&temp_dir.path().join("bench.db")).expect("open database");
    db.initialize_schema().expect("initialize schema");
    db
}

/// Benchmark aggregation with various history sizes.
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100usize, 10_000, 100_000] {
        let moods: Vec<Mood> = (0..size).map(|i| Mood::ALL[i % Mood::ALL.len()]).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &moods, |b, moods| {
            b.iter(|| black_box(aggregate_moods(black_box(moods).iter().copied())));
        });
    }

    group.finish();
}

/// Benchmark a single check-in against a growing log.
fn bench_record(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = open_bench_db(&temp_dir);
    let user = UserId::new("bench@example.com").expect("user id");

    c.bench_function("record", |b| {
        b.iter(|| {
            let id = db
                .record(black_box(&user), black_box("calm"), Some("bench note"))
                .expect("record failed");
            black_box(id);
        });
    });
}

/// Benchmark listing history with various log sizes.
fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_for_user");

    for size in [10usize, 1_000] {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db = open_bench_db(&temp_dir);
        let user = UserId::new("bench@example.com").expect("user id");
        for i in 0..size {
            db.record(&user, Mood::ALL[i % Mood::ALL.len()].as_str(), None)
                .expect("record failed");
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &user, |b, user| {
            b.iter(|| black_box(db.list_for_user(black_box(user)).expect("list failed")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_record, bench_list);
criterion_main!(benches);
