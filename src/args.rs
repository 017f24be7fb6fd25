//! These structs provide the CLI interface for the market CLI.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// market: sync point-of-sale CSV exports to a Google sheet.
///
/// Reads the CSV files the point-of-sale system exports into the input directory, appends any
/// not-yet-recorded unit sales to the transaction-log sheet, then rebuilds the item-sales
/// summary sheet from the transaction log's full history. Running it twice over the same
/// exports is safe: rows already present in the sheet are never appended again.
///
/// The spreadsheet id, sheet ranges, packaging-marker word and item catalog come from a YAML
/// configuration file, `config.yaml` by default.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// Path to the YAML configuration file.
    #[arg(long, env = "MARKET_SYNC_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// The directory holding the point-of-sale CSV exports. Overrides the input_dir
    /// configuration value.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Wait for Enter before exiting, so the window stays open when the program is launched
    /// from a double-click.
    #[arg(long)]
    pause: bool,
}

impl Args {
    pub fn new(
        log_level: LevelFilter,
        config: PathBuf,
        input_dir: Option<PathBuf>,
        pause: bool,
    ) -> Self {
        Self {
            log_level,
            config,
            input_dir,
            pause,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> &Path {
        &self.config
    }

    pub fn input_dir(&self) -> Option<&Path> {
        self.input_dir.as_deref()
    }

    pub fn pause(&self) -> bool {
        self.pause
    }
}
