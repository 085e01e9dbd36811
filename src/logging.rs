//! Logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. Verbosity
//! follows `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{HourglassError, Result};

/// Installs the global subscriber, appending to `path`.
pub fn init(path: &Path) -> Result<()> {
    let cannot_open =
        |e: std::io::Error| HourglassError::Logging(format!("cannot open {}: {e}", path.display()));

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(cannot_open)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(cannot_open)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| HourglassError::Logging(e.to_string()))
}
