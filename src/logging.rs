//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{RunMode, Settings};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The terminal belongs to the UI and no file was given.
    Discard,
}

impl LogTarget {
    pub fn for_settings(settings: &Settings) -> Self {
        match (&settings.log_file, settings.mode) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, RunMode::Headless(_)) => LogTarget::Stderr,
            (None, RunMode::Tui) => LogTarget::Discard,
        }
    }

    fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        Ok(match self {
            LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            LogTarget::Discard => BoxMakeWriter::new(io::sink),
        })
    }
}

pub fn init_tracing(target: &LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(target.make_writer()?)
        .with_ansi(matches!(target, LogTarget::Stderr))
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn target_follows_mode_and_log_file() {
        let mut settings = Settings::default();
        assert_eq!(LogTarget::for_settings(&settings), LogTarget::Discard);

        settings.mode = RunMode::Headless(OutputFormat::Text);
        assert_eq!(LogTarget::for_settings(&settings), LogTarget::Stderr);

        settings.log_file = Some(PathBuf::from("watch.log"));
        assert_eq!(
            LogTarget::for_settings(&settings),
            LogTarget::File(PathBuf::from("watch.log"))
        );
    }

    #[test]
    fn file_target_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipmorph.log");
        LogTarget::File(path.clone()).make_writer().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_target_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("clipmorph.log");
        assert!(LogTarget::File(path).make_writer().is_err());
    }
}
