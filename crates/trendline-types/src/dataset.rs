//! Regional dataset documents.
//!
//! A dataset is one JSON document per region, keyed by metric name:
//!
//! ```json
//! {
//!   "code": "VR13",
//!   "sewer": {
//!     "values": [{ "date_unix": 1600000000, "average": 12.5 }],
//!     "last_value": { "date_unix": 1600000000, "average": 12.5 }
//!   }
//! }
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Record, Result, TrendError, records_from_value};

/// Key of the time series inside a metric object.
const VALUES_KEY: &str = "values";
/// Key of the most recent record inside a metric object.
const LAST_VALUE_KEY: &str = "last_value";

/// A parsed regional dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    document: Map<String, Value>,
}

/// A single metric's time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    /// The metric's records in dataset order.
    pub values: Vec<Record>,
    /// The most recent record, when the dataset provides one.
    pub last_value: Option<Record>,
}

impl Dataset {
    /// Builds the conventional `<dir>/<code>.json` path for a region.
    #[must_use]
    pub fn region_path(dir: impl AsRef<Path>, code: &str) -> PathBuf {
        dir.as_ref().join(format!("{code}.json"))
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Json`] for malformed JSON, or
    /// [`TrendError::InvalidDocument`] if it is not an object.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Reads a dataset from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the JSON is malformed or not an object.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Reads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| TrendError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.display(), metrics = dataset.metric_names().len(), "loaded dataset");
        Ok(dataset)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(TrendError::InvalidDocument(other)),
        }
    }

    /// Returns the region code, if the document carries one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.document.get("code").and_then(Value::as_str)
    }

    /// Returns the names of all entries that hold a time series, sorted.
    #[must_use]
    pub fn metric_names(&self) -> Vec<&str> {
        self.document
            .iter()
            .filter(|(_, value)| value.get(VALUES_KEY).is_some_and(Value::is_array))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Decodes the named metric.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::UnknownMetric`] if there is no time series under
    /// that name, or a decoding error if one of its records is malformed.
    pub fn metric(&self, name: &str) -> Result<Metric> {
        let unknown = || TrendError::UnknownMetric(name.to_string());
        let entry = self.document.get(name).ok_or_else(unknown)?;
        let values = entry
            .get(VALUES_KEY)
            .filter(|values| values.is_array())
            .ok_or_else(unknown)?;

        let values = records_from_value(values.clone())?;
        let last_value = match entry.get(LAST_VALUE_KEY) {
            Some(value @ Value::Object(_)) => Some(Record::from_value(value.clone())?),
            _ => None,
        };

        Ok(Metric { values, last_value })
    }
}

impl Metric {
    /// Returns true if the metric has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
