//! Timeframe boundary resolution.

use chrono::{DateTime, Utc};
use trendline_types::{Result, Timeframe, TimeframeTable};

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Resolves a timeframe selector to the lowest Unix timestamp it includes.
///
/// [`Timeframe::All`] resolves to `0`. A bounded window resolves to
/// `now - days * 86400`, with the day count taken from `table`.
///
/// # Errors
///
/// Returns [`trendline_types::TrendError::UnknownTimeframe`] if the window is
/// not in the table.
pub fn resolve_boundary(
    timeframe: &Timeframe,
    table: &TimeframeTable,
    now: DateTime<Utc>,
) -> Result<i64> {
    let boundary = match table.days(timeframe)? {
        None => 0,
        Some(days) => now.timestamp() - i64::from(days) * SECONDS_PER_DAY,
    };
    tracing::debug!(%timeframe, boundary, "resolved timeframe boundary");
    Ok(boundary)
}
