//! Command-line interface for `counter`.
//!
//! # Examples
//!
//! ```bash
//! # Interactive, full screen, mouse enabled
//! counter
//!
//! # Inline rendering without mouse capture
//! counter --no-alt-screen --no-mouse
//!
//! # Headless: apply events and print the final view
//! counter --script "inc, inc, dec"
//! ```

use std::path::PathBuf;

use clap::Parser;

/// A terminal counter that never goes below zero.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "counter",
    author,
    version,
    about = "A terminal counter that never goes below zero",
    long_about = "Increment and decrement a counter with the keyboard or mouse. \
                  Decrementing at zero leaves the count alone and shows an error."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "COUNTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long, env = "COUNTER_NO_MOUSE")]
    pub no_mouse: bool,

    /// Render inline instead of on the alternate screen
    #[arg(long, env = "COUNTER_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Target frames per second (1-120)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write logs to this file
    #[arg(long, env = "COUNTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run headless: apply comma- or space-separated events
    /// (inc/+/increment, dec/-/decrement), print the final view and exit
    #[arg(long, value_name = "EVENTS", allow_hyphen_values = true)]
    pub script: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from an iterator.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Whether the binary should run without a terminal.
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.script.is_some()
    }
}
