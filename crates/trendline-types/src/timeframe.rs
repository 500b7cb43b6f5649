//! Timeframe selectors and the day-count table that resolves them.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Result, TrendError};

/// The default timeframe table embedded at compile time.
const DEFAULT_TIMEFRAMES_JSON: &str = include_str!("../data/timeframes.json");

/// Global default timeframe table.
static DEFAULT_TABLE: OnceLock<TimeframeTable> = OnceLock::new();

/// Symbolic time window selected by a chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    /// No lower bound, include everything.
    #[default]
    All,
    /// A named window such as `week` or `5weeks`, resolved via a [`TimeframeTable`].
    Window(String),
}

impl Timeframe {
    /// Returns the selector token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Window(token) => token,
        }
    }

    /// Returns true if this selector has no lower bound.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "" => Err(TimeframeParseError(s.to_string())),
            "all" => Ok(Self::All),
            _ => Ok(Self::Window(token)),
        }
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TimeframeParseError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Timeframe> for String {
    fn from(timeframe: Timeframe) -> Self {
        match timeframe {
            Timeframe::All => "all".to_string(),
            Timeframe::Window(token) => token,
        }
    }
}

/// Error returned when parsing an empty timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected 'all' or a window name",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}

/// Lookup table from window tokens to day counts.
///
/// `all` is always implicit and never looked up. Tokens are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TimeframeTable {
    windows: BTreeMap<String, u32>,
}

impl TimeframeTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
        }
    }

    /// Returns the embedded default table (`week`, `month`, `5weeks`).
    #[must_use]
    pub fn global() -> &'static Self {
        DEFAULT_TABLE.get_or_init(|| {
            Self::from_json(DEFAULT_TIMEFRAMES_JSON).expect("Invalid timeframes.json")
        })
    }

    /// Parses a table from a JSON object of `{ "token": days }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let windows: BTreeMap<String, u32> = serde_json::from_str(json)?;
        Ok(Self::from_windows(windows))
    }

    /// Reads a table from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the JSON is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let windows: BTreeMap<String, u32> = serde_json::from_reader(reader)?;
        Ok(Self::from_windows(windows))
    }

    /// Reads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TrendError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), windows = table.len(), "loaded timeframe table");
        Ok(table)
    }

    fn from_windows(windows: BTreeMap<String, u32>) -> Self {
        windows
            .into_iter()
            .fold(Self::new(), |table, (token, days)| {
                table.with_window(token, days)
            })
    }

    /// Adds or replaces a window.
    ///
    /// An `all` entry is ignored since that selector is never bounded.
    #[must_use]
    pub fn with_window(mut self, token: impl AsRef<str>, days: u32) -> Self {
        let token = token.as_ref().trim().to_lowercase();
        if token != "all" && !token.is_empty() {
            self.windows.insert(token, days);
        }
        self
    }

    /// Returns the day count for a selector, or `None` for [`Timeframe::All`].
    ///
    /// Window tokens are matched case-insensitively, and a window named `all`
    /// is unbounded like [`Timeframe::All`].
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::UnknownTimeframe`] if the window is not in the table.
    pub fn days(&self, timeframe: &Timeframe) -> Result<Option<u32>> {
        let Timeframe::Window(token) = timeframe else {
            return Ok(None);
        };

        let normalized = token.trim().to_lowercase();
        if normalized == "all" {
            return Ok(None);
        }
        self.windows
            .get(&normalized)
            .copied()
            .map(Some)
            .ok_or_else(|| TrendError::UnknownTimeframe(token.clone()))
    }

    /// Returns all `(token, days)` pairs sorted by token.
    pub fn windows(&self) -> impl Iterator<Item = (&str, u32)> {
        self.windows.iter().map(|(token, days)| (token.as_str(), *days))
    }

    /// Returns the number of bounded windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns true if the table has no bounded windows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
