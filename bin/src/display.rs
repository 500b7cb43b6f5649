//! Display utilities and output formatting for the trendline CLI.

use anyhow::Result;
use std::io::{self, BufWriter, Write};
use trendline_lib::prelude::*;

/// How extracted series are written.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputOptions {
    pub(crate) format: OutputFormat,
    /// Pretty-print JSON arrays.
    pub(crate) pretty: bool,
    /// CSV field delimiter.
    pub(crate) delimiter: char,
    /// Write the CSV header row.
    pub(crate) header: bool,
}

/// Write series to stdout in the specified format.
pub(crate) fn write_series(series: &[NamedSeries<'_>], options: OutputOptions) -> Result<()> {
    let mut writer = BufWriter::new(io::stdout());

    match options.format {
        OutputFormat::Json => {
            let formatter = JsonFormatter::new().with_pretty(options.pretty);
            formatter.write_series(series, &mut writer)?;
        }
        OutputFormat::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_series(series, &mut writer)?;
        }
        OutputFormat::Csv => {
            let formatter = CsvFormatter::new()
                .with_delimiter(options.delimiter)
                .with_header(options.header);
            formatter.write_series(series, &mut writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Parse a timeframe selector given on the command line.
pub(crate) fn parse_timeframe(s: &str) -> Result<Timeframe> {
    Ok(s.parse::<Timeframe>()?)
}
