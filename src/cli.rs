//! Command-line interface parsing for the Taiwan weather dashboard
//!
//! This module handles parsing of CLI arguments using clap: the city shown on
//! startup, the request timeout and where the log file goes.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::{get_location_by_id, Location};
use crate::fetch::FetchConfig;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified location is not one the API serves
    #[error("Invalid location: '{0}'. Valid locations: kaohsiung, taipei, new-taipei, taichung")]
    InvalidLocation(String),

    /// A zero timeout would fail every request
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Taiwan weather dashboard - forecasts with umbrella and clothing advice
#[derive(Parser, Debug)]
#[command(name = "twweather")]
#[command(about = "Taiwan city forecasts with umbrella and clothing advice")]
#[command(version)]
pub struct Cli {
    /// City to show on startup
    ///
    /// Valid locations: kaohsiung, taipei, new-taipei, taichung
    #[arg(short, long, value_name = "CITY", default_value = "kaohsiung")]
    pub location: String,

    /// Seconds to wait for the forecast API before giving up
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Write logs to this file instead of the default data directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Location fetched on startup
    pub initial_location: Location,
    /// Loading delay and request timeout
    pub fetch: FetchConfig,
    /// Explicit log file path
    pub log_file: Option<PathBuf>,
}

/// Parses a location string argument into a Location.
///
/// # Arguments
/// * `s` - The location string from CLI
///
/// # Returns
/// * `Ok(Location)` if the string names a supported city
/// * `Err(CliError::InvalidLocation)` if it doesn't
pub fn parse_location_arg(s: &str) -> Result<Location, CliError> {
    get_location_by_id(s).ok_or_else(|| CliError::InvalidLocation(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an argument is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_location = parse_location_arg(&cli.location)?;
        if cli.timeout_secs == 0 {
            return Err(CliError::ZeroTimeout);
        }

        Ok(StartupConfig {
            initial_location,
            fetch: FetchConfig {
                timeout: Duration::from_secs(cli.timeout_secs),
                ..FetchConfig::default()
            },
            log_file: cli.log_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_arg_all_cities() {
        assert_eq!(parse_location_arg("kaohsiung").unwrap(), Location::Kaohsiung);
        assert_eq!(parse_location_arg("taipei").unwrap(), Location::Taipei);
        assert_eq!(parse_location_arg("new-taipei").unwrap(), Location::NewTaipei);
        assert_eq!(parse_location_arg("taichung").unwrap(), Location::Taichung);
    }

    #[test]
    fn test_parse_location_arg_invalid() {
        let result = parse_location_arg("tainan");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid location"));
        assert!(err.to_string().contains("tainan"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.initial_location, Location::Kaohsiung);
        assert_eq!(config.fetch.min_loading, Duration::from_millis(1500));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["twweather"]);
        assert_eq!(cli.location, "kaohsiung");
        assert_eq!(cli.timeout_secs, 10);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_parse_short_location() {
        let cli = Cli::parse_from(["twweather", "-l", "taipei"]);
        assert_eq!(cli.location, "taipei");
    }

    #[test]
    fn test_startup_config_from_cli() {
        let cli = Cli::parse_from([
            "twweather",
            "--location",
            "taichung",
            "--timeout-secs",
            "3",
            "--log-file",
            "/tmp/tw.log",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_location, Location::Taichung);
        assert_eq!(config.fetch.timeout, Duration::from_secs(3));
        assert_eq!(config.fetch.min_loading, Duration::from_millis(1500));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tw.log")));
    }

    #[test]
    fn test_startup_config_from_cli_invalid_location() {
        let cli = Cli::parse_from(["twweather", "--location", "nowhere"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_startup_config_from_cli_zero_timeout() {
        let cli = Cli::parse_from(["twweather", "--timeout-secs", "0"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::ZeroTimeout)
        ));
    }
}
