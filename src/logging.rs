//! Log file setup
//!
//! The terminal belongs to the dashboard, so tracing output goes to a file.
//! The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "twweather.log";

/// Default log file location in the platform data directory
///
/// `~/.local/share/twweather/twweather.log` on Linux. Returns `None` when no
/// home directory can be determined.
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "twweather")?;
    Some(project_dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Opens a log file for appending, creating parent directories
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global tracing subscriber
///
/// # Arguments
/// * `path` - Explicit log file, or `None` for [`default_log_path`]
///
/// # Returns
/// * `Ok(Some(path))` - The file logs are written to
/// * `Ok(None)` - No log location could be determined; logging is off
/// * `Err` - The log file could not be opened
pub fn init(path: Option<PathBuf>) -> io::Result<Option<PathBuf>> {
    let Some(path) = path.or_else(default_log_path) else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Fails only when a subscriber is already installed, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}
