//! Trend command implementation.
//!
//! This module extracts one chart series per requested field and writes them
//! to stdout.

use anyhow::Result;
use trendline_lib::prelude::*;

use crate::config::Settings;
use crate::display::{OutputOptions, parse_timeframe, write_series};

/// Extract and print the series of `fields` for a region's metric.
pub(crate) fn trend(
    settings: &Settings,
    code: &str,
    metric: &str,
    fields: &[String],
    timeframe: &str,
    output: OutputOptions,
) -> Result<()> {
    let timeframe = parse_timeframe(timeframe)?;
    let metric_data = settings.metric(code, metric)?;

    let series = extract_trends(
        &metric_data.values,
        fields,
        &timeframe,
        &settings.table,
        settings.now,
    )?;

    for (field, points) in fields.iter().zip(&series) {
        if points.is_empty() {
            tracing::info!(code, metric, field = %field, %timeframe, "nothing to plot");
        }
    }
    tracing::debug!(format = %output.format, series = series.len(), "writing series");

    write_series(&NamedSeries::zip(fields, &series), output)
}
