//! Runtime settings, taken from the command line.

mod cli;
mod types;

pub use cli::Cli;
pub use types::{
    ConfigError, OutputFormat, RunMode, Settings, DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS,
    MIN_INTERVAL_MS,
};
