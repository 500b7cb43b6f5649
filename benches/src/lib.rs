//! Synthetic datasets for trendline benchmarks.

use trendline_lib::{Record, SECONDS_PER_DAY};

/// Fields carried by every synthetic record.
pub const FIELDS: [&str; 3] = ["average", "total_reported", "infected_per_100k"];

/// Builds `days` daily records starting at the epoch.
///
/// Every seventh value of each field is null, offset per field so that the
/// series drop different records.
pub fn daily_records(days: usize) -> Vec<Record> {
    (0..days)
        .map(|day| {
            let date_unix = day as i64 * SECONDS_PER_DAY;
            FIELDS
                .iter()
                .enumerate()
                .fold(Record::instant(date_unix), |record, (offset, field)| {
                    let value = ((day + offset) % 7 != 0).then(|| (day * (offset + 1)) as f64);
                    record.with_field(*field, value)
                })
        })
        .collect()
}

/// Builds `weeks` weekly records starting at the epoch.
pub fn weekly_records(weeks: usize) -> Vec<Record> {
    let week = 7 * SECONDS_PER_DAY;
    (0..weeks)
        .filter_map(|i| {
            let start = i as i64 * week;
            Record::interval(start, start + week - 1).ok()
        })
        .enumerate()
        .map(|(i, record)| record.with_field(FIELDS[0], Some(i as f64)))
        .collect()
}
