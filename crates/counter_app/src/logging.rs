//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the configured
//! verbosity. Interactive runs own the terminal, so logs go to the configured
//! file or nowhere; headless runs fall back to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::Config;

/// Logging setup error.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened.
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Default filter directive for a verbosity level.
#[must_use]
pub const fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file.
    File(PathBuf),
    /// Standard error.
    Stderr,
    /// Drop everything.
    Discard,
}

impl LogTarget {
    /// Pick the target for a run.
    #[must_use]
    pub fn select(config: &Config, headless: bool) -> Self {
        match &config.log_file {
            Some(path) => Self::File(path.clone()),
            None if headless => Self::Stderr,
            None => Self::Discard,
        }
    }
}

/// Install the global subscriber.
pub fn init(config: &Config, headless: bool) -> Result<(), LogError> {
    let target = LogTarget::select(config, headless);
    let writer = match &target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::Open {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(config.verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(matches!(target, LogTarget::Stderr) && config.use_color())
        .with_target(false)
        .try_init()
        .map_err(|e| LogError::Install(e.to_string()))?;

    tracing::debug!(?target, verbosity = config.verbosity, "logging initialized");
    Ok(())
}
