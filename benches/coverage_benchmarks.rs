//! Performance benchmarks for the coverage engine.
//!
//! The engine runs on every dashboard render, so the hot paths are checked
//! at realistic sizes:
//! - merging a day's worth of intervals: < 100μs
//! - grouping a day of shifts into coverage segments: < 1ms
//! - indexing a month of shifts for a mid-size operator: < 10ms
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};

use coverage_engine::config::Palette;
use coverage_engine::coverage::{
    build_day_coverage, build_shift_index, detect_service_gaps, merge_intervals,
};
use coverage_engine::models::{Dimension, Directory, Interval, ServiceRecord, ShiftRecord};

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("Valid benchmark date")
}

/// Builds `count` intervals spread over one day, every third one
/// overlapping its neighbor.
fn create_intervals(count: usize) -> Vec<Interval> {
    let day_start = base_day().and_hms_opt(0, 0, 0).expect("Valid midnight time");
    (0..count)
        .map(|i| {
            let start = day_start + Duration::minutes((i as i64 * 7) % 1380);
            let len = 30 + (i as i64 % 3) * 45;
            Interval::new(start, start + Duration::minutes(len)).expect("Valid interval")
        })
        .collect()
}

/// Builds `count` shifts across `days` days for a ten-guard roster.
fn create_shifts(count: usize, days: i64) -> Vec<ShiftRecord> {
    (0..count)
        .map(|i| {
            let day = base_day() + Duration::days(i as i64 % days);
            let start = day
                .and_hms_opt(6 + (i as u32 % 3) * 8, 0, 0)
                .expect("Valid shift start");
            ShiftRecord {
                id: i as i64,
                guard: Some(i as i64 % 10),
                guard_details: None,
                property: Some(i as i64 % 4),
                property_details: None,
                service: Some(3),
                start_time: Some(start),
                end_time: Some(start + Duration::hours(8)),
                planned_start_time: None,
                planned_end_time: None,
            }
        })
        .collect()
}

fn bench_merge_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_intervals");
    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let intervals = create_intervals(count);
            b.iter(|| merge_intervals(black_box(intervals.clone())));
        });
    }
    group.finish();
}

fn bench_day_coverage(c: &mut Criterion) {
    let shifts = create_shifts(60, 1);
    let directory = Directory::default();
    let palette = Palette::default();

    c.bench_function("build_day_coverage_60_shifts", |b| {
        b.iter(|| {
            build_day_coverage(
                black_box(base_day()),
                black_box(&shifts),
                Dimension::Guard,
                &directory,
                &palette,
            )
        });
    });
}

fn bench_gap_detection(c: &mut Criterion) {
    let service = ServiceRecord {
        id: 3,
        property: Some(1),
        start_time: chrono::NaiveTime::from_hms_opt(22, 0, 0),
        end_time: chrono::NaiveTime::from_hms_opt(6, 0, 0),
    };
    let shifts = create_shifts(40, 1);

    c.bench_function("detect_service_gaps_40_shifts", |b| {
        b.iter(|| detect_service_gaps(black_box(&service), black_box(base_day()), &shifts));
    });
}

fn bench_shift_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_shift_index");
    for count in [100, 1000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let shifts = create_shifts(count, 30);
            b.iter(|| build_shift_index(black_box(&shifts), Dimension::Guard));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_merge_intervals,
    bench_day_coverage,
    bench_gap_detection,
    bench_shift_index
);
criterion_main!(benches);
