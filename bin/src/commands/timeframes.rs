//! Timeframes command implementation.

use anyhow::Result;

use crate::config::Settings;

/// List the timeframe selectors available to `--timeframe`.
pub(crate) fn list_timeframes(settings: &Settings) -> Result<()> {
    println!("{:<16} {:>6}", "TIMEFRAME", "DAYS");
    println!("{}", "-".repeat(23));
    println!("{:<16} {:>6}", "all", "-");

    for (token, days) in settings.table.windows() {
        println!("{token:<16} {days:>6}");
    }

    Ok(())
}
