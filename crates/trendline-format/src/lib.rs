//! Output formatters for trendline chart series.
//!
//! This crate provides formatters for writing extracted series for a
//! rendering layer:
//!
//! - [`CsvFormatter`] - CSV format, one row per point
//! - [`JsonFormatter`] - JSON array or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, NamedSeries, OutputFormat};
pub use json::JsonFormatter;
