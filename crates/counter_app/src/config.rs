//! Runtime configuration for the `counter` binary.
//!
//! [`Config`] is the single source of truth for runtime toggles. It is
//! resolved in three layers: built-in defaults, then an optional TOML file,
//! then command-line flags.
//!
//! # Example file
//!
//! ```toml
//! mouse = false
//! alt_screen = true
//! color = "never"
//! fps = 30
//! log_file = "/tmp/counter.log"
//! verbosity = 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Highest frame rate the runtime accepts.
pub const MAX_FPS: u32 = 120;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Capture mouse clicks.
    pub mouse: bool,
    /// Use the alternate screen.
    pub alt_screen: bool,
    /// Color output mode.
    pub color: ColorMode,
    /// Target frames per second.
    pub fps: u32,
    /// Where to write logs. Logs are discarded in interactive mode without it.
    pub log_file: Option<PathBuf>,
    /// Log verbosity (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mouse: true,
            alt_screen: true,
            color: ColorMode::Auto,
            fps: 60,
            log_file: None,
            verbosity: 0,
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color unless `NO_COLOR` is set.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },

    /// The frame rate is outside 1..=120.
    #[error("fps must be between 1 and {MAX_FPS}, got {0}")]
    InvalidFps(u32),
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Resolve the effective config: defaults, then the file named by
    /// `--config` (if any), then the remaining flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = base.merge_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line flags.
    ///
    /// Negative flags only ever switch features off, so a file setting is
    /// kept unless the flag is given. Any `-v` replaces the file's verbosity.
    #[must_use]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.no_mouse {
            self.mouse = false;
        }
        if cli.no_alt_screen {
            self.alt_screen = false;
        }
        if cli.no_color {
            self.color = ColorMode::Never;
        }
        if let Some(fps) = cli.fps {
            self.fps = fps;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        if cli.verbose > 0 {
            self.verbosity = cli.verbose;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        Ok(())
    }

    /// Whether output should be colored.
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Whether output written to a sink should be colored. `Auto` only
    /// colors terminals.
    pub fn use_color_for(&self, is_terminal: bool) -> bool {
        match self.color {
            ColorMode::Auto => is_terminal && self.use_color(),
            ColorMode::Always | ColorMode::Never => self.use_color(),
        }
    }
}
