use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use clipmorph::config::{Cli, RunMode};
use clipmorph::logging::{init_tracing, LogTarget};
use clipmorph::transform::Registry;

fn main() -> anyhow::Result<()> {
    let settings = match Cli::parse().into_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let log_target = LogTarget::for_settings(&settings);
    init_tracing(&log_target).context("failed to open log file")?;
    tracing::info!(mode = ?settings.mode, "Starting clipmorph");

    let registry = Arc::new(Registry::standard());
    match settings.mode {
        RunMode::Tui => clipmorph::ui::run(registry, settings.poll_interval)
            .context("terminal UI failed")?,
        RunMode::Headless(format) => {
            clipmorph::headless::run(registry, settings.poll_interval, format)?
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
