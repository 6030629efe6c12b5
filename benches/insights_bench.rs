//! Performance benchmarks for the aggregation engine.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Window binning over histories of various lengths
//! - Streak walking and most-frequent-mood counting
//! - CSV export

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moodmate::export::export_csv;
use moodmate::insights::{current_streak, most_frequent_mood, summarize_window, DateKey};
use moodmate::mood::{Mood, MoodEntry};

/// Roughly three entries a day, newest first, ending now.
fn history(len: usize) -> Vec<MoodEntry> {
    let now = Utc::now();
    (0..len)
        .map(|i| {
            let timestamp = now - Duration::hours(8 * i as i64);
            let mood = Mood::ALL[i % Mood::ALL.len()];
            MoodEntry::new((len - i) as i64, timestamp, mood, "benchmark, note", None)
        })
        .collect()
}

const SIZES: [(&str, usize); 3] = [("100", 100), ("10K", 10_000), ("100K", 100_000)];

fn bench_summarize_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_window");
    let today = DateKey::today();

    for (name, size) in SIZES {
        let entries = history(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("30_days", name), &entries, |b, entries| {
            b.iter(|| black_box(summarize_window(black_box(entries), 30, today)));
        });
    }

    group.finish();
}

fn bench_streak_and_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak_and_frequency");
    let today = DateKey::today();

    for (name, size) in SIZES {
        let entries = history(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("streak", name), &entries, |b, entries| {
            b.iter(|| black_box(current_streak(black_box(entries), today)));
        });
        group.bench_with_input(
            BenchmarkId::new("most_frequent", name),
            &entries,
            |b, entries| {
                b.iter(|| black_box(most_frequent_mood(black_box(entries))));
            },
        );
    }

    group.finish();
}

fn bench_export_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_csv");

    for (name, size) in SIZES {
        let entries = history(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &entries, |b, entries| {
            b.iter(|| black_box(export_csv(black_box(entries))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_summarize_window,
    bench_streak_and_frequency,
    bench_export_csv
);
criterion_main!(benches);
