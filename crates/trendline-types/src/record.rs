//! Time-indexed records and their timestamp shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Result, TrendError};

/// Field name of an instant record's timestamp.
pub const DATE_UNIX: &str = "date_unix";
/// Field name of an interval record's start timestamp.
pub const DATE_START_UNIX: &str = "date_start_unix";
/// Field name of an interval record's end timestamp.
pub const DATE_END_UNIX: &str = "date_end_unix";

/// Timestamp granularity of a record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Records stamped with a single instant (`date_unix`).
    Daily,
    /// Records stamped with a start/end interval (`date_start_unix`, `date_end_unix`).
    Weekly,
}

impl Shape {
    /// Returns the shape as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Returns the field that supplies the plotted date for this shape.
    #[must_use]
    pub const fn date_field(&self) -> &'static str {
        match self {
            Self::Daily => DATE_UNIX,
            Self::Weekly => DATE_START_UNIX,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The timestamp carried by a record, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// A single point in time.
    Instant {
        /// Unix seconds.
        date_unix: i64,
    },
    /// A closed interval, `date_start_unix <= date_end_unix`.
    Interval {
        /// Unix seconds at the start of the interval.
        date_start_unix: i64,
        /// Unix seconds at the end of the interval.
        date_end_unix: i64,
    },
}

impl Timestamp {
    /// Creates an interval timestamp, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidInterval`] if start > end.
    pub fn interval(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(TrendError::InvalidInterval { start, end });
        }
        Ok(Self::Interval {
            date_start_unix: start,
            date_end_unix: end,
        })
    }

    /// Returns the shape this timestamp belongs to.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Instant { .. } => Shape::Daily,
            Self::Interval { .. } => Shape::Weekly,
        }
    }

    /// Returns the timestamp used for filtering and plotting.
    ///
    /// This is `date_unix` for instants and `date_start_unix` for intervals.
    #[must_use]
    pub const fn start_unix(&self) -> i64 {
        match self {
            Self::Instant { date_unix } => *date_unix,
            Self::Interval {
                date_start_unix, ..
            } => *date_start_unix,
        }
    }

    /// Returns the last second covered by this timestamp.
    #[must_use]
    pub const fn end_unix(&self) -> i64 {
        match self {
            Self::Instant { date_unix } => *date_unix,
            Self::Interval { date_end_unix, .. } => *date_end_unix,
        }
    }

    /// Returns the start timestamp as a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::TimestampOutOfRange`] if the timestamp does not
    /// fit a calendar date.
    pub fn start_date(&self) -> Result<DateTime<Utc>> {
        let seconds = self.start_unix();
        seconds
            .checked_mul(1000)
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(TrendError::TimestampOutOfRange(seconds))
    }

    /// Looks up one of the timestamp fields by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        match (self, name) {
            (Self::Instant { date_unix }, DATE_UNIX) => Some(*date_unix),
            (
                Self::Interval {
                    date_start_unix, ..
                },
                DATE_START_UNIX,
            ) => Some(*date_start_unix),
            (Self::Interval { date_end_unix, .. }, DATE_END_UNIX) => Some(*date_end_unix),
            _ => None,
        }
    }

    fn write_into(self, map: &mut Map<String, Value>) {
        match self {
            Self::Instant { date_unix } => {
                map.insert(DATE_UNIX.to_string(), Value::from(date_unix));
            }
            Self::Interval {
                date_start_unix,
                date_end_unix,
            } => {
                map.insert(DATE_START_UNIX.to_string(), Value::from(date_start_unix));
                map.insert(DATE_END_UNIX.to_string(), Value::from(date_end_unix));
            }
        }
    }
}

/// A single observation: a timestamp plus named fields.
///
/// Records decode from flat JSON objects. The timestamp shape is decided once
/// here: an object with `date_unix` is an instant, otherwise an object with
/// `date_end_unix` (and `date_start_unix`) is an interval. All remaining keys
/// are kept verbatim so they can be passed through to chart points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    timestamp: Timestamp,
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record with an instant timestamp and no fields.
    #[must_use]
    pub fn instant(date_unix: i64) -> Self {
        Self {
            timestamp: Timestamp::Instant { date_unix },
            fields: Map::new(),
        }
    }

    /// Creates a record with an interval timestamp and no fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidInterval`] if start > end.
    pub fn interval(date_start_unix: i64, date_end_unix: i64) -> Result<Self> {
        Ok(Self {
            timestamp: Timestamp::interval(date_start_unix, date_end_unix)?,
            fields: Map::new(),
        })
    }

    /// Decodes a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::UnclassifiableShape`] if the value is not an
    /// object with a recognised timestamp, or [`TrendError::InvalidInterval`]
    /// if an interval ends before it starts.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(unclassifiable(other)),
        }
    }

    /// Sets a numeric-or-null field.
    ///
    /// Non-finite values are stored as null.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        self.fields
            .insert(name.into(), value.map_or(Value::Null, Value::from));
        self
    }

    /// Sets a field to an arbitrary JSON value.
    #[must_use]
    pub fn with_raw_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Returns the record's timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the record's timestamp shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.timestamp.shape()
    }

    /// Returns the non-timestamp fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a non-timestamp field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the record carries `name`, as a timestamp or a field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.timestamp.get(name).is_some() || self.fields.contains_key(name)
    }

    /// Reads a numeric field, where `Ok(None)` means the value is null.
    ///
    /// Timestamp fields are numeric and can be read as well.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::UnknownField`] if the record has no such field,
    /// or [`TrendError::NonNumericField`] if it holds neither a number nor null.
    pub fn numeric(&self, name: &str) -> Result<Option<f64>> {
        if let Some(seconds) = self.timestamp.get(name) {
            return Ok(Some(seconds as f64));
        }

        match self.fields.get(name) {
            None => Err(TrendError::UnknownField {
                field: name.to_string(),
            }),
            Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => Ok(number.as_f64()),
            Some(other) => Err(TrendError::NonNumericField {
                field: name.to_string(),
                value: other.clone(),
            }),
        }
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = TrendError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self> {
        let timestamp = if let Some(date) = map.get(DATE_UNIX) {
            let Some(date_unix) = unix_seconds(date) else {
                return Err(unclassifiable(Value::Object(map)));
            };
            map.remove(DATE_UNIX);
            Timestamp::Instant { date_unix }
        } else if map.contains_key(DATE_END_UNIX) {
            let start = map.get(DATE_START_UNIX).and_then(unix_seconds);
            let end = map.get(DATE_END_UNIX).and_then(unix_seconds);
            let (Some(start), Some(end)) = (start, end) else {
                return Err(unclassifiable(Value::Object(map)));
            };
            map.remove(DATE_START_UNIX);
            map.remove(DATE_END_UNIX);
            Timestamp::interval(start, end)?
        } else {
            return Err(unclassifiable(Value::Object(map)));
        };

        Ok(Self {
            timestamp,
            fields: map,
        })
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        let mut map = record.fields;
        record.timestamp.write_into(&mut map);
        map
    }
}

/// Decodes a JSON array of records.
///
/// # Errors
///
/// Returns the first decoding error, or [`TrendError::UnclassifiableShape`]
/// if the value is not an array.
pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Array(values) => values.into_iter().map(Record::from_value).collect(),
        other => Err(unclassifiable(other)),
    }
}

/// Reads Unix seconds from a JSON number, truncating fractional seconds.
fn unix_seconds(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

fn unclassifiable(element: Value) -> TrendError {
    tracing::warn!(%element, "record matches neither instant nor interval timestamps");
    TrendError::UnclassifiableShape { element }
}
