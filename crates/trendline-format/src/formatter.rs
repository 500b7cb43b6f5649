//! Output format abstraction.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use trendline_trend::TrendPoint;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON array format.
    #[default]
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// CSV format.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "csv" => Ok(Self::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One extracted series labelled with the field it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedSeries<'a> {
    /// The record field the values were read from.
    pub field: &'a str,
    /// The chart points, in chronological order.
    pub points: &'a [TrendPoint],
}

impl<'a> NamedSeries<'a> {
    /// Pairs field names with their series, in order.
    ///
    /// Extra entries on either side are ignored.
    pub fn zip<S: AsRef<str>>(fields: &'a [S], series: &'a [Vec<TrendPoint>]) -> Vec<Self> {
        fields
            .iter()
            .zip(series)
            .map(|(field, points)| Self {
                field: field.as_ref(),
                points,
            })
            .collect()
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes extracted series to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write + Send>(
        &self,
        series: &[NamedSeries<'_>],
        writer: W,
    ) -> Result<(), FormatError>;
}
