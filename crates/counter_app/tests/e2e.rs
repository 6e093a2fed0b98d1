//! End-to-end tests for the `counter` binary.
//!
//! Interactive mode needs a TTY, so these drive the binary through
//! `--script`, which runs the same widget headlessly and prints the final view.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Get a Command for the counter binary with a clean environment.
#[allow(deprecated)]
fn counter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("counter").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COUNTER_CONFIG")
        .env_remove("COUNTER_LOG_FILE")
        .env_remove("COUNTER_NO_MOUSE")
        .env_remove("COUNTER_NO_ALT_SCREEN");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Script Mode
// =============================================================================

mod script_mode {
    use super::*;

    #[test]
    fn test_empty_script_prints_initial_view() {
        counter_cmd()
            .args(["--script", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is currently 0"))
            .stdout(predicate::str::contains("[ Increment ]"))
            .stdout(predicate::str::contains("[ Decrement ]"))
            .stdout(predicate::str::contains("cannot go below zero").not());
    }

    #[test]
    fn test_increments() {
        counter_cmd()
            .args(["--script", "inc, inc, +"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is currently 3"));
    }

    #[test]
    fn test_decrement_at_zero_shows_error() {
        counter_cmd()
            .args(["--script", "dec"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is currently 0"))
            .stdout(predicate::str::contains("The counter cannot go below zero"));
    }

    #[test]
    fn test_increment_clears_error() {
        counter_cmd()
            .args(["--script", "- +"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is currently 1"))
            .stdout(predicate::str::contains("cannot go below zero").not());
    }

    #[test]
    fn test_script_starting_with_minus() {
        counter_cmd()
            .args(["--script", "-,-,+"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is currently 1"))
            .stdout(predicate::str::contains("cannot go below zero").not());
    }

    #[test]
    fn test_unknown_event_fails() {
        counter_cmd()
            .args(["--script", "inc, reset"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown event \"reset\""))
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_piped_output_is_plain() {
        counter_cmd()
            .args(["--script", "dec"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_color_always_from_file() {
        let file = config_file("color = \"always\"\n");
        counter_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--script", "dec"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}["));
    }

    #[test]
    fn test_no_color_flag_overrides_file() {
        let file = config_file("color = \"always\"\n");
        counter_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--no-color", "--script", "dec"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_config_from_env() {
        let file = config_file("color = \"always\"\n");
        counter_cmd()
            .env("COUNTER_CONFIG", file.path())
            .args(["--script", "inc"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}["));
    }

    #[test]
    fn test_invalid_fps_in_file() {
        let file = config_file("fps = 0\n");
        counter_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--script", "inc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("fps must be between 1 and 120"));
    }

    #[test]
    fn test_invalid_fps_flag() {
        counter_cmd()
            .args(["--fps", "500", "--script", "inc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("got 500"));
    }

    #[test]
    fn test_unknown_config_key() {
        let file = config_file("count = 5\n");
        counter_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--script", "inc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_missing_config_file() {
        counter_cmd()
            .args(["--config", "/nonexistent/counter.toml", "--script", "inc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config file"));
    }
}

// =============================================================================
// Logging
// =============================================================================

mod logging {
    use super::*;

    #[test]
    fn test_log_file_records_refused_decrement() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("counter.log");
        counter_cmd()
            .arg("--log-file")
            .arg(&log)
            .args(["-v", "--script", "dec"])
            .assert()
            .success();

        let contents = std::fs::read_to_string(&log).unwrap();
        assert!(contents.contains("decrement refused at zero"), "{contents}");
    }

    #[test]
    fn test_default_level_is_quiet() {
        counter_cmd()
            .args(["--script", "dec, inc"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

// =============================================================================
// CLI Surface
// =============================================================================

mod cli_surface {
    use super::*;

    #[test]
    fn test_help() {
        counter_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--script"))
            .stdout(predicate::str::contains("--no-mouse"));
    }

    #[test]
    fn test_version() {
        counter_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("counter"));
    }

    #[test]
    fn test_unknown_flag() {
        counter_cmd().arg("--bogus").assert().failure();
    }
}
