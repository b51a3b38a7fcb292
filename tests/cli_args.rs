//! Integration tests for CLI argument handling
//!
//! Tests the --location flag and startup configuration from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_twweather"))
        .args(args)
        .output()
        .expect("Failed to execute twweather")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("twweather"), "Help should mention twweather");
    assert!(stdout.contains("location"), "Help should mention --location flag");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_location_prints_error_and_exits() {
    let output = run_cli(&["--location", "tainan"]);
    assert!(!output.status.success(), "Expected invalid location to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid location") && stderr.contains("tainan"),
        "Should print error message about invalid location: {}",
        stderr
    );
}

#[test]
fn test_zero_timeout_prints_error_and_exits() {
    let output = run_cli(&["--timeout-secs", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Timeout"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_non_numeric_timeout_is_rejected_by_clap() {
    let output = run_cli(&["--timeout-secs", "soon"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use std::time::Duration;
    use twweather::cli::{parse_location_arg, Cli, StartupConfig};
    use twweather::data::Location;

    #[test]
    fn test_cli_no_args_defaults_to_kaohsiung() {
        let cli = Cli::parse_from(["twweather"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_location, Location::Kaohsiung);
        assert_eq!(config.fetch.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_cli_location_flag_with_new_taipei() {
        let cli = Cli::parse_from(["twweather", "--location", "new-taipei"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_location, Location::NewTaipei);
    }

    #[test]
    fn test_parse_location_arg_is_case_insensitive() {
        assert_eq!(parse_location_arg("TAIPEI").unwrap(), Location::Taipei);
    }

    #[test]
    fn test_parse_location_arg_invalid_returns_error() {
        assert!(parse_location_arg("invalid").is_err());
    }
}
