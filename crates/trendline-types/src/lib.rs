//! Core types for the trendline chart-data toolkit.
//!
//! This crate provides the fundamental data structures used throughout trendline:
//!
//! - [`Record`] - A single observation with an instant or interval [`Timestamp`]
//! - [`Shape`] - Daily (instant) vs weekly (interval) timestamp granularity
//! - [`Timeframe`] - Symbolic chart window selector
//! - [`TimeframeTable`] - Day counts for the bounded selectors
//! - [`Dataset`] - A regional JSON document holding several metrics

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod error;
mod record;
mod timeframe;

pub use dataset::{Dataset, Metric};
pub use error::{Result, TrendError};
pub use record::{
    DATE_END_UNIX, DATE_START_UNIX, DATE_UNIX, Record, Shape, Timestamp, records_from_value,
};
pub use timeframe::{Timeframe, TimeframeParseError, TimeframeTable};
