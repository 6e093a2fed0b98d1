#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]

//! # counter_app
//!
//! Terminal host for [`counter_widget`]: a crossterm event loop, layered
//! configuration, logging setup and a headless script mode.
//!
//! The `counter` binary wires these together:
//!
//! ```text
//! Cli ──▶ Config::resolve ──▶ logging::init
//!                           ├─▶ script::run_script   (--script)
//!                           └─▶ Program::run         (interactive)
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod program;
pub mod script;

pub use cli::Cli;
pub use config::{ColorMode, Config, ConfigError};
pub use program::{Program, ProgramHandle, ProgramOptions};
pub use script::{ScriptError, parse_script, run_script};
