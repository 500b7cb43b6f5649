//! Runtime settings shared by all commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use trendline_lib::prelude::*;

/// File name of the user timeframe table inside the config directory.
const TIMEFRAMES_FILE: &str = "timeframes.json";

/// Resolved settings for one CLI invocation.
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) data_dir: PathBuf,
    pub(crate) table: TimeframeTable,
    pub(crate) now: DateTime<Utc>,
}

impl Settings {
    /// Resolves the timeframe table and the current time.
    ///
    /// The table comes from `timeframes` if given, else from the user config
    /// directory if a table exists there, else from the embedded default.
    pub(crate) fn load(
        data_dir: PathBuf,
        timeframes: Option<&Path>,
        now: Option<i64>,
    ) -> Result<Self> {
        let table = match timeframes.map(Path::to_path_buf).or_else(user_table_path) {
            Some(path) if timeframes.is_some() || path.exists() => TimeframeTable::from_path(&path)
                .with_context(|| format!("Failed to load timeframe table {}", path.display()))?,
            _ => TimeframeTable::global().clone(),
        };

        let now = match now {
            Some(seconds) => DateTime::from_timestamp(seconds, 0)
                .with_context(|| format!("Invalid --now timestamp: {seconds}"))?,
            None => Utc::now(),
        };

        tracing::debug!(
            data_dir = %data_dir.display(),
            windows = table.len(),
            now = now.timestamp(),
            "resolved settings"
        );

        Ok(Self {
            data_dir,
            table,
            now,
        })
    }

    /// Loads the document for a region.
    pub(crate) fn dataset(&self, code: &str) -> Result<Dataset> {
        let path = Dataset::region_path(&self.data_dir, code);
        Dataset::from_path(&path)
            .with_context(|| format!("Failed to load region {code} from {}", path.display()))
    }

    /// Loads one metric of a region.
    pub(crate) fn metric(&self, code: &str, name: &str) -> Result<Metric> {
        self.dataset(code)?
            .metric(name)
            .with_context(|| format!("Failed to read metric '{name}' of region {code}"))
    }
}

/// Returns the platform config location of the user timeframe table.
///
/// - Linux: `~/.config/trendline/timeframes.json`
/// - macOS: `~/Library/Application Support/trendline/timeframes.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\trendline\config\timeframes.json`
fn user_table_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trendline").map(|dirs| dirs.config_dir().join(TIMEFRAMES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_table_and_now() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TIMEFRAMES_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "fortnight": 14 }}"#).unwrap();

        let settings = Settings::load(dir.path().to_path_buf(), Some(&path), Some(1_000)).unwrap();

        let fortnight: Timeframe = "fortnight".parse().unwrap();
        assert_eq!(settings.table.days(&fortnight).unwrap(), Some(14));
        assert_eq!(settings.now.timestamp(), 1_000);
    }

    #[test]
    fn test_missing_explicit_table_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(Settings::load(dir.path().to_path_buf(), Some(&path), None).is_err());
    }

    #[test]
    fn test_metric_lookup() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("VR01.json")).unwrap();
        write!(file, r#"{{ "sewer": {{ "values": [{{ "date_unix": 1, "average": 2 }}] }} }}"#)
            .unwrap();

        let settings = Settings::load(dir.path().to_path_buf(), None, Some(0)).unwrap();
        assert_eq!(settings.metric("VR01", "sewer").unwrap().values.len(), 1);
        assert!(settings.metric("VR01", "hospital").is_err());
        assert!(settings.metric("VR02", "sewer").is_err());
    }
}
