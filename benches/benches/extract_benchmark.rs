//! Trend extraction benchmarks.
//!
//! Run with: `cargo bench --package trendline-bench`

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use trendline_bench::{FIELDS, daily_records, weekly_records};
use trendline_lib::{Timeframe, TimeframeTable, calculate_y_max, extract_trends};

fn extract_benchmark(c: &mut Criterion) {
    let table = TimeframeTable::global();
    let windows: [(&str, Timeframe); 2] = [
        ("all", Timeframe::All),
        ("5weeks", Timeframe::Window("5weeks".to_string())),
    ];

    let mut group = c.benchmark_group("extract_trends");

    for days in [365, 3650] {
        let records = daily_records(days);
        let now = Utc
            .timestamp_opt(records.last().map_or(0, |r| r.timestamp().start_unix()), 0)
            .unwrap();
        group.throughput(Throughput::Elements(days as u64));

        for (name, timeframe) in &windows {
            group.bench_with_input(BenchmarkId::new(*name, days), &records, |b, records| {
                b.iter(|| extract_trends(records, &FIELDS, timeframe, table, now).unwrap());
            });
        }
    }

    let weekly = weekly_records(520);
    let now = Utc.timestamp_opt(0, 0).unwrap();
    group.bench_function("weekly/520", |b| {
        b.iter(|| extract_trends(&weekly, &FIELDS[..1], &Timeframe::All, table, now).unwrap());
    });

    group.finish();
}

fn scale_benchmark(c: &mut Criterion) {
    let records = daily_records(3650);
    let now = Utc.timestamp_opt(0, 0).unwrap();
    let series = extract_trends(
        &records,
        &FIELDS,
        &Timeframe::All,
        TimeframeTable::global(),
        now,
    )
    .unwrap();

    c.bench_function("calculate_y_max/3650", |b| {
        b.iter(|| calculate_y_max(&series, Some(50.0)));
    });
}

criterion_group!(benches, extract_benchmark, scale_benchmark);
criterion_main!(benches);
