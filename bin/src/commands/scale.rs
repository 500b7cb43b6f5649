//! Scale command implementation.

use anyhow::Result;
use trendline_lib::prelude::*;

use crate::config::Settings;
use crate::display::parse_timeframe;

/// Print the Y-axis maximum shared by `fields` of a region's metric.
pub(crate) fn scale(
    settings: &Settings,
    code: &str,
    metric: &str,
    fields: &[String],
    timeframe: &str,
    signal: Option<f64>,
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

    println!("{}", calculate_y_max(&series, signal));
    Ok(())
}
