//! Fatal error types.
//!
//! Everything the user can recover from (bad duration text, a failed
//! notification) is handled where it happens. The errors here end the
//! process with a non-zero exit code.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum HourglassError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened or the subscriber installed.
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// The terminal program failed to start or crashed.
    #[error("uh oh, we encountered an issue: {0}")]
    Runtime(#[from] bubbletea_rs::Error),
}

pub type Result<T> = std::result::Result<T, HourglassError>;
