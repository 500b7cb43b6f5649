//! Error types for trendline.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for trendline operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur while decoding, filtering or extracting time series.
///
/// Only [`TrendError::InvariantViolation`] and [`TrendError::UnclassifiableShape`]
/// describe the series itself; empty results and null values are never errors.
#[derive(Error, Debug)]
pub enum TrendError {
    /// A caller broke a precondition, such as classifying an empty sequence.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// A record carries neither an instant nor an interval timestamp.
    #[error("Incompatible timestamps are used in value {element}")]
    UnclassifiableShape {
        /// The offending record as it was decoded.
        element: Value,
    },

    /// An interval record ends before it starts.
    #[error("Invalid interval: {start} > {end}")]
    InvalidInterval {
        /// The `date_start_unix` value.
        start: i64,
        /// The `date_end_unix` value.
        end: i64,
    },

    /// A Unix timestamp cannot be represented as a calendar date.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// The timeframe selector is not present in the timeframe table.
    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),

    /// The requested field does not exist on a record.
    #[error("Unknown field: {field}")]
    UnknownField {
        /// The requested field name.
        field: String,
    },

    /// The requested field exists but holds something other than a number or null.
    #[error("Field '{field}' is not numeric: {value}")]
    NonNumericField {
        /// The requested field name.
        field: String,
        /// The value found on the record.
        value: Value,
    },

    /// A regional document is not a JSON object.
    #[error("Invalid dataset document: {0}")]
    InvalidDocument(Value),

    /// The dataset has no metric with the given name, or it is not a time series.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
