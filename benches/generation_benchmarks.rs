//! Performance benchmarks for the hours-sync engine.
//!
//! Covers the operations run on every invocation:
//! - Aggregating a month of fetched timesheet entries
//! - Generating entries for the longest allowed range (31 days)
//! - Required hours for a full year against the bundled calendar
//! - Parsing the bundled holiday CSV
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use hours_sync::calculation::{aggregate, compute_required_hours, generate_entries};
use hours_sync::holidays::{CsvHolidays, HolidayProvider};
use hours_sync::models::{ExclusionSet, RawTimeEntry, WorkCalendar};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// `per_day` entries of 2h on every day of October 2024.
fn october_entries(per_day: usize) -> Vec<RawTimeEntry> {
    date("2024-10-01")
        .iter_days()
        .take(31)
        .flat_map(|d| std::iter::repeat_n(RawTimeEntry::new(1234, d, Decimal::new(2, 0)), per_day))
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for per_day in [1usize, 4, 16] {
        let entries = october_entries(per_day);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_day), &entries, |b, entries| {
            b.iter(|| aggregate(black_box(entries)))
        });
    }
    group.finish();
}

fn bench_generate_max_range(c: &mut Criterion) {
    let holidays = CsvHolidays::bundled().load().expect("bundled calendar");
    let calendar = WorkCalendar::new(holidays, ExclusionSet::new());
    let report = aggregate(&[]);
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_entries_31_days", |b| {
        b.iter(|| {
            generate_entries(
                black_box(&report),
                date("2024-12-01"),
                date("2025-01-01"),
                &calendar,
                1234,
                &mut rng,
            )
        })
    });
}

fn bench_required_hours(c: &mut Criterion) {
    let holidays = CsvHolidays::bundled().load().expect("bundled calendar");

    c.bench_function("required_hours_year", |b| {
        b.iter(|| compute_required_hours(black_box(2025), &holidays))
    });
}

fn bench_load_bundled_calendar(c: &mut Criterion) {
    let provider = CsvHolidays::bundled();

    c.bench_function("load_bundled_calendar", |b| b.iter(|| provider.load()));
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_generate_max_range,
    bench_required_hours,
    bench_load_bundled_calendar
);
criterion_main!(benches);
