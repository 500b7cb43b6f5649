//! Timeframe filtering.

use trendline_types::{Record, Result, Shape};

use crate::classify;

/// Returns the records at or after `boundary`, in their original order.
///
/// Daily records are compared on `date_unix`. Weekly records are compared on
/// `date_start_unix`, so a week that started before the boundary is excluded
/// even when it ends after it.
///
/// # Errors
///
/// Returns [`trendline_types::TrendError::InvariantViolation`] if `records`
/// is empty. Callers that accept empty input must check before filtering.
pub fn filter_by_timeframe(records: &[Record], boundary: i64) -> Result<Vec<&Record>> {
    let shape = classify(records)?;
    let filtered: Vec<&Record> = records
        .iter()
        .filter(|record| shape_timestamp(record, shape).is_some_and(|ts| ts >= boundary))
        .collect();

    tracing::debug!(
        %shape,
        boundary,
        total = records.len(),
        kept = filtered.len(),
        "filtered records by timeframe"
    );
    Ok(filtered)
}

/// Reads the timestamp field that `shape` filters on.
///
/// Records of the other shape have no such field.
fn shape_timestamp(record: &Record, shape: Shape) -> Option<i64> {
    record.timestamp().get(shape.date_field())
}
