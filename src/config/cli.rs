use std::path::PathBuf;

use clap::Parser;

use crate::config::types::{ConfigError, OutputFormat, RunMode, Settings, DEFAULT_INTERVAL_MS};

/// Watch the clipboard and show vector/matrix literals in other notations.
#[derive(Debug, Parser)]
#[command(name = "clipmorph", version, about)]
pub struct Cli {
    /// Clipboard poll interval in milliseconds
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print results to stdout instead of opening the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Output format for headless mode
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write logs to this file (the terminal UI otherwise discards them)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let poll_interval = Settings::validate_interval(self.interval_ms)?;
        let mode = match (self.headless, self.format) {
            (true, format) => RunMode::Headless(format.unwrap_or_default()),
            (false, None) => RunMode::Tui,
            (false, Some(_)) => return Err(ConfigError::FormatWithoutHeadless),
        };
        Ok(Settings {
            poll_interval,
            mode,
            log_file: self.log_file,
        })
    }
}
