//! Chart-ready time series from regional public-health datasets.
//!
//! This is a facade crate that re-exports functionality from the trendline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use trendline_lib::prelude::*;
//!
//! let dataset = Dataset::from_json(r#"{
//!     "sewer": { "values": [
//!         { "date_unix": 100, "average": 5 },
//!         { "date_unix": 200, "average": null },
//!         { "date_unix": 300, "average": 7 }
//!     ] }
//! }"#)?;
//! let metric = dataset.metric("sewer")?;
//!
//! let now = Utc.timestamp_opt(1_000, 0).unwrap();
//! let series = extract_trends(
//!     &metric.values,
//!     &["average"],
//!     &Timeframe::All,
//!     TimeframeTable::global(),
//!     now,
//! )?;
//!
//! assert_eq!(series[0].len(), 2);
//! assert_eq!(calculate_y_max(&series, None), 7.0);
//! # Ok::<(), TrendError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use trendline_types::*;

// Re-export the trend pipeline
pub use trendline_trend::{
    SECONDS_PER_DAY, TrendPoint, calculate_y_max, classify, extract_single_trend, extract_trends,
    filter_by_timeframe, is_instant, is_interval, resolve_boundary, series_max,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use trendline_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, NamedSeries, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use trendline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use trendline_types::{
        Dataset, Metric, Record, Result, Shape, Timeframe, TimeframeTable, Timestamp, TrendError,
    };

    pub use trendline_trend::{
        TrendPoint, calculate_y_max, classify, extract_single_trend, extract_trends,
        filter_by_timeframe, resolve_boundary,
    };

    #[cfg(feature = "format")]
    pub use trendline_format::{CsvFormatter, Formatter, JsonFormatter, NamedSeries, OutputFormat};
}
