//! CLI command implementations.

pub(crate) mod metrics;
pub(crate) mod scale;
pub(crate) mod timeframes;
pub(crate) mod trend;
