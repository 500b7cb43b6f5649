//! trendline CLI - chart series from regional dashboard datasets.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use config::Settings;
use display::OutputOptions;
use trendline_lib::OutputFormat;

#[derive(Parser)]
#[command(name = "trendline")]
#[command(about = "Chart series from regional dashboard datasets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory holding one <code>.json document per region
    #[arg(long, global = true, default_value = "public/json")]
    data_dir: PathBuf,

    /// Timeframe table (JSON object of window name to day count)
    #[arg(long, global = true)]
    timeframes: Option<PathBuf>,

    /// Current time as Unix seconds. Defaults to the system clock.
    #[arg(long, global = true)]
    now: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract chart series for one or more fields of a metric
    Trend {
        /// Region code (e.g., VR13)
        code: String,

        /// Metric name inside the region document (e.g., sewer)
        metric: String,

        /// Numeric fields to extract, one series each
        #[arg(required = true)]
        fields: Vec<String>,

        /// Timeframe selector (all, or a window from the timeframe table)
        #[arg(short, long, default_value = "all")]
        timeframe: String,

        /// Output format (json, ndjson, csv)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// CSV field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Omit the CSV header row
        #[arg(long)]
        no_header: bool,
    },

    /// Compute the Y-axis maximum for fields of a metric
    Scale {
        /// Region code (e.g., VR13)
        code: String,

        /// Metric name inside the region document
        metric: String,

        /// Numeric fields that share the axis
        #[arg(required = true)]
        fields: Vec<String>,

        /// Timeframe selector (all, or a window from the timeframe table)
        #[arg(short, long, default_value = "all")]
        timeframe: String,

        /// Signal threshold drawn as a reference line
        #[arg(short, long)]
        signal: Option<f64>,
    },

    /// List the metrics of a region document
    Metrics {
        /// Region code (e.g., VR13)
        code: String,
    },

    /// List the configured timeframe selectors
    Timeframes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::load(cli.data_dir, cli.timeframes.as_deref(), cli.now)?;

    match command {
        Commands::Trend {
            code,
            metric,
            fields,
            timeframe,
            format,
            pretty,
            delimiter,
            no_header,
        } => {
            let output = OutputOptions {
                format,
                pretty,
                delimiter,
                header: !no_header,
            };
            commands::trend::trend(&settings, &code, &metric, &fields, &timeframe, output)
        }
        Commands::Scale {
            code,
            metric,
            fields,
            timeframe,
            signal,
        } => commands::scale::scale(&settings, &code, &metric, &fields, &timeframe, signal),
        Commands::Metrics { code } => commands::metrics::list_metrics(&settings, &code),
        Commands::Timeframes => commands::timeframes::list_timeframes(&settings),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
