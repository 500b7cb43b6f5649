//! Trend extraction from record sequences.

use chrono::{DateTime, Utc};
use serde::Serialize;
use trendline_types::{Record, Result, Timeframe, TimeframeTable, TrendError};

use crate::{classify, filter_by_timeframe, resolve_boundary};

/// A single chart point: a date, a value and the record it came from.
///
/// Serializes flat, with the record's own fields next to `__date` and
/// `__value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Plotted date (`date_unix` or `date_start_unix`).
    #[serde(rename = "__date")]
    pub date: DateTime<Utc>,
    /// Plotted value of the requested field.
    #[serde(rename = "__value")]
    pub value: f64,
    /// The original record.
    #[serde(flatten)]
    pub record: Record,
}

/// Extracts one series per field, in the order the fields are given.
///
/// Every series is computed independently, so a null in one field never
/// removes a point from another field's series.
///
/// # Errors
///
/// Returns the first error raised by [`extract_single_trend`].
pub fn extract_trends<S: AsRef<str>>(
    records: &[Record],
    fields: &[S],
    timeframe: &Timeframe,
    table: &TimeframeTable,
    now: DateTime<Utc>,
) -> Result<Vec<Vec<TrendPoint>>> {
    fields
        .iter()
        .map(|field| extract_single_trend(records, field.as_ref(), timeframe, table, now))
        .collect()
}

/// Extracts the series of `field` for the records inside `timeframe`.
///
/// An empty input, or an input with nothing inside the timeframe, yields an
/// empty series. Records whose `field` is null or absent are skipped. The output keeps
/// the chronological order of the input.
///
/// # Errors
///
/// Returns [`trendline_types::TrendError::UnknownTimeframe`] for a window
/// missing from `table`, [`trendline_types::TrendError::UnknownField`] if no
/// record inside the timeframe carries `field`, or
/// [`trendline_types::TrendError::NonNumericField`] if a retained record holds
/// something other than a number or null.
pub fn extract_single_trend(
    records: &[Record],
    field: &str,
    timeframe: &Timeframe,
    table: &TimeframeTable,
    now: DateTime<Utc>,
) -> Result<Vec<TrendPoint>> {
    // Stale datasets can be empty for a timeframe; render nothing.
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let boundary = resolve_boundary(timeframe, table, now)?;
    let in_frame = filter_by_timeframe(records, boundary)?;
    if in_frame.is_empty() {
        tracing::debug!(field, %timeframe, "no records inside timeframe");
        return Ok(Vec::new());
    }

    let shape = classify(&in_frame)?;
    let mut points = Vec::with_capacity(in_frame.len());
    let mut carried = false;
    for record in in_frame {
        // Sparse records count as null for this field.
        if !record.has_field(field) {
            tracing::trace!(
                field,
                date = record.timestamp().start_unix(),
                "skipping record without field"
            );
            continue;
        }
        carried = true;

        let Some(value) = record.numeric(field)? else {
            tracing::trace!(
                field,
                date = record.timestamp().start_unix(),
                "skipping null value"
            );
            continue;
        };

        // Retained records all carry the shape's date field, which is their start.
        points.push(TrendPoint {
            date: record.timestamp().start_date()?,
            value,
            record: record.clone(),
        });
    }

    if !carried {
        return Err(TrendError::UnknownField {
            field: field.to_string(),
        });
    }

    tracing::debug!(field, %shape, points = points.len(), "extracted trend");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    fn values(series: &[TrendPoint]) -> Vec<f64> {
        series.iter().map(|p| p.value).collect()
    }

    fn dates(series: &[TrendPoint]) -> Vec<i64> {
        series.iter().map(|p| p.date.timestamp()).collect()
    }

    #[test]
    fn test_empty_short_circuit() {
        let table = TimeframeTable::new();
        for now in [0, 1_700_000_000] {
            let now = Utc.timestamp_opt(now, 0).unwrap();
            // Even an unknown window is not resolved for empty input
            let series =
                extract_single_trend(&[], "value", &"decade".parse().unwrap(), &table, now)
                    .unwrap();
            assert!(series.is_empty());
        }

        let all =
            extract_single_trend(&[], "value", &Timeframe::All, TimeframeTable::global(), epoch())
                .unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_null_record_dropped_after_filter() {
        let records = vec![
            Record::instant(100).with_field("value", Some(5.0)),
            Record::instant(200).with_field("value", None),
            Record::instant(300).with_field("value", Some(7.0)),
        ];

        // A one-day window ending at 86_550 starts at boundary 150
        let table = TimeframeTable::new().with_window("day", 1);
        let now = Utc.timestamp_opt(86_400 + 150, 0).unwrap();

        let series =
            extract_single_trend(&records, "value", &"day".parse().unwrap(), &table, now).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 7.0);
        assert_eq!(series[0].date, Utc.timestamp_opt(300, 0).unwrap());
        assert_eq!(series[0].record, records[2]);
    }

    #[test]
    fn test_independent_null_handling() {
        let records = vec![
            Record::instant(1)
                .with_field("a", None)
                .with_field("b", Some(10.0)),
            Record::instant(2)
                .with_field("a", Some(2.0))
                .with_field("b", None),
            Record::instant(3)
                .with_field("a", Some(3.0))
                .with_field("b", Some(30.0)),
        ];

        let series = extract_trends(
            &records,
            &["a", "b"],
            &Timeframe::All,
            TimeframeTable::global(),
            epoch(),
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(dates(&series[0]), vec![2, 3]);
        assert_eq!(values(&series[0]), vec![2.0, 3.0]);
        assert_eq!(dates(&series[1]), vec![1, 3]);
        assert_eq!(values(&series[1]), vec![10.0, 30.0]);
    }

    #[test]
    fn test_field_order_preserved() {
        let records = vec![
            Record::instant(1)
                .with_field("x", Some(1.0))
                .with_field("y", Some(2.0)),
        ];

        let series = extract_trends(
            &records,
            &["y", "x", "y"],
            &Timeframe::All,
            TimeframeTable::global(),
            epoch(),
        )
        .unwrap();

        let firsts: Vec<f64> = series.iter().map(|s| s[0].value).collect();
        assert_eq!(firsts, vec![2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_weekly_dates_use_start() {
        let week = 7 * 86_400;
        let records = vec![
            Record::interval(0, week - 1)
                .unwrap()
                .with_field("wash_hands", Some(70.0)),
            Record::interval(week, 2 * week - 1)
                .unwrap()
                .with_field("wash_hands", Some(75.0)),
        ];

        let series = extract_single_trend(
            &records,
            "wash_hands",
            &Timeframe::All,
            TimeframeTable::global(),
            epoch(),
        )
        .unwrap();

        assert_eq!(dates(&series), vec![0, week]);
        assert_eq!(values(&series), vec![70.0, 75.0]);
    }

    #[test]
    fn test_chronological_order_kept() {
        let records = vec![
            Record::instant(30).with_field("v", Some(3.0)),
            Record::instant(10).with_field("v", Some(1.0)),
            Record::instant(20).with_field("v", Some(2.0)),
        ];

        let series =
            extract_single_trend(&records, "v", &Timeframe::All, TimeframeTable::global(), epoch())
                .unwrap();
        assert_eq!(dates(&series), vec![30, 10, 20]);
    }

    #[test]
    fn test_nothing_in_frame() {
        let records = vec![Record::instant(10).with_field("v", Some(1.0))];
        let table = TimeframeTable::new().with_window("week", 7);
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

        let series =
            extract_single_trend(&records, "v", &"week".parse().unwrap(), &table, now).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_unknown_timeframe_propagates() {
        let records = vec![Record::instant(10).with_field("v", Some(1.0))];
        let result = extract_single_trend(
            &records,
            "v",
            &"fortnight".parse().unwrap(),
            &TimeframeTable::new(),
            epoch(),
        );
        assert!(matches!(result, Err(TrendError::UnknownTimeframe(_))));
    }

    #[test]
    fn test_field_validation() {
        let records = vec![
            Record::instant(1)
                .with_field("v", Some(1.0))
                .with_raw_field("label", json!("low")),
        ];
        let table = TimeframeTable::global();

        assert!(matches!(
            extract_single_trend(&records, "missing", &Timeframe::All, table, epoch()),
            Err(TrendError::UnknownField { field }) if field == "missing"
        ));
        assert!(matches!(
            extract_single_trend(&records, "label", &Timeframe::All, table, epoch()),
            Err(TrendError::NonNumericField { field, .. }) if field == "label"
        ));
    }

    #[test]
    fn test_sparse_field_skips_records_without_it() {
        let records = vec![
            Record::instant(1).with_field("a", Some(1.0)),
            Record::instant(2).with_field("b", Some(9.0)),
            Record::instant(3).with_field("a", Some(3.0)),
        ];
        let table = TimeframeTable::global();

        let a = extract_single_trend(&records, "a", &Timeframe::All, table, epoch()).unwrap();
        assert_eq!(dates(&a), vec![1, 3]);
        assert_eq!(values(&a), vec![1.0, 3.0]);

        let b = extract_single_trend(&records, "b", &Timeframe::All, table, epoch()).unwrap();
        assert_eq!(values(&b), vec![9.0]);
    }

    #[test]
    fn test_field_absent_inside_timeframe() {
        // Only the record outside the window carries the field
        let records = vec![
            Record::instant(100).with_field("a", Some(1.0)),
            Record::instant(300).with_field("b", Some(2.0)),
        ];
        let table = TimeframeTable::new().with_window("day", 1);
        let now = Utc.timestamp_opt(86_400 + 150, 0).unwrap();

        assert!(matches!(
            extract_single_trend(&records, "a", &"day".parse().unwrap(), &table, now),
            Err(TrendError::UnknownField { field }) if field == "a"
        ));
    }

    #[test]
    fn test_timestamp_field_can_be_plotted() {
        let records = vec![Record::instant(42)];
        let series = extract_single_trend(
            &records,
            "date_unix",
            &Timeframe::All,
            TimeframeTable::global(),
            epoch(),
        )
        .unwrap();
        assert_eq!(values(&series), vec![42.0]);
    }

    #[test]
    fn test_point_serializes_flat() {
        let point = TrendPoint {
            date: Utc.timestamp_opt(86_400, 0).unwrap(),
            value: 4.0,
            record: Record::instant(86_400).with_field("average", Some(4.0)),
        };

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["__date"], json!("1970-01-02T00:00:00Z"));
        assert_eq!(value["__value"], json!(4.0));
        assert_eq!(value["date_unix"], json!(86_400));
        assert_eq!(value["average"], json!(4.0));
    }
}
