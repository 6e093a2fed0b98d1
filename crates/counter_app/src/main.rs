#![forbid(unsafe_code)]

//! # counter
//!
//! Terminal counter that never goes below zero.
//!
//! ```bash
//! counter                       # interactive, full screen
//! counter --no-mouse -v         # keyboard only, info logs
//! counter --script "+ + -"      # headless, prints the final view
//! ```

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use counter_widget::{CounterWidget, Model};
use tracing::info;

use counter_app::logging;
use counter_app::{Cli, Config, Program, ProgramOptions, run_script};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli).context("invalid configuration")?;
    logging::init(&config, cli.is_headless()).context("failed to set up logging")?;

    match &cli.script {
        Some(script) => run_headless(&config, script),
        None => run_interactive(&config),
    }
}

fn run_headless(config: &Config, script: &str) -> anyhow::Result<()> {
    let color = config.use_color_for(io::stdout().is_terminal());
    let widget = run_script(CounterWidget::new().with_color(color), script)
        .context("invalid script")?;
    info!(count = widget.state().count(), "script complete");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", widget.view()).context("failed to write view")?;
    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let options = ProgramOptions {
        alt_screen: config.alt_screen,
        mouse: config.mouse,
        custom_io: false,
        fps: config.fps,
    };
    let widget = CounterWidget::new().with_color(config.use_color());
    let widget = Program::new(widget)
        .with_options(options)
        .run()
        .context("terminal session failed")?;
    info!(count = widget.state().count(), "session ended");
    Ok(())
}
