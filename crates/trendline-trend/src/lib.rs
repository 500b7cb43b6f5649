//! Timeframe filtering, trend extraction and axis scaling for trendline.
//!
//! The pipeline runs strictly in one direction, and every stage is a pure
//! function of its inputs:
//!
//! 1. [`resolve_boundary`] - timeframe selector to lower-bound Unix timestamp
//! 2. [`classify`] - daily vs weekly records, from the first element
//! 3. [`filter_by_timeframe`] - records at or after the boundary
//! 4. [`extract_trends`] - one `(date, value)` series per requested field
//! 5. [`calculate_y_max`] - Y-axis maximum across series and a threshold

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classify;
mod extract;
mod filter;
mod resolve;
mod scale;

pub use classify::{classify, is_instant, is_interval};
pub use extract::{TrendPoint, extract_single_trend, extract_trends};
pub use filter::filter_by_timeframe;
pub use resolve::{SECONDS_PER_DAY, resolve_boundary};
pub use scale::{calculate_y_max, series_max};
