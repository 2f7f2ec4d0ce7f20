use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 5_000;

/// Errors raised while validating settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Poll interval {value}ms out of range ({min}..={max}ms)")]
    InvalidInterval { value: u64, min: u64, max: u64 },

    #[error("--format only applies to --headless output")]
    FormatWithoutHeadless,
}

/// Headless output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `label: text` lines, blank line between changes.
    #[default]
    Text,
    /// One JSON object per change.
    Json,
}

/// Where results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal UI with copy-back.
    Tui,
    /// Results streamed to stdout.
    Headless(OutputFormat),
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub poll_interval: Duration,
    pub mode: RunMode,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            mode: RunMode::Tui,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn validate_interval(interval_ms: u64) -> Result<Duration, ConfigError> {
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&interval_ms) {
            return Err(ConfigError::InvalidInterval {
                value: interval_ms,
                min: MIN_INTERVAL_MS,
                max: MAX_INTERVAL_MS,
            });
        }
        Ok(Duration::from_millis(interval_ms))
    }
}
