//! Y-axis scaling.

use crate::TrendPoint;

/// Returns the highest value of a series, or negative infinity when empty.
#[must_use]
pub fn series_max(series: &[TrendPoint]) -> f64 {
    series
        .iter()
        .map(|point| point.value)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Computes the maximum the Y-axis has to accommodate.
///
/// The result is the largest of the overall series maximum, twice the
/// `signal` threshold and `1`. Doubling keeps a dominant threshold line in
/// the middle of the chart rather than on its top edge, and the floor keeps
/// the axis from collapsing when there is no positive data. `None` means no
/// threshold.
#[must_use]
pub fn calculate_y_max<S: AsRef<[TrendPoint]>>(series: &[S], signal: Option<f64>) -> f64 {
    let overall = series
        .iter()
        .map(|s| series_max(s.as_ref()))
        .fold(f64::NEG_INFINITY, f64::max);
    let signal = signal.map_or(f64::NEG_INFINITY, |value| value * 2.0);

    overall.max(signal).max(1.0)
}
