//! Configuration from environment variables.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOURGLASS_START_SCREEN` | `landing` | First screen: `landing` or `input` |
//! | `HOURGLASS_COMPLETION_SCREEN` | `true` | Show the completion menu on expiry; when off, quit instead |
//! | `HOURGLASS_TICK_MS` | `100` | Countdown tick interval in milliseconds (10-1000) |
//! | `HOURGLASS_NOTIFY` | `true` | Send a desktop notification on expiry |
//! | `HOURGLASS_SOUND` | `true` | Play an alert sound with the notification |
//! | `HOURGLASS_NOTIFY_ICON` | - | Path to an image used as the notification icon |
//! | `HOURGLASS_LOG_FILE` | `<tmp>/hourglass.log` | Where log output goes |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::app::{AppOptions, StartScreen};

const DEFAULT_TICK_MS: u64 = 100;
const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1000;
const DEFAULT_LOG_FILE: &str = "hourglass.log";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// The notification icon could not be read.
    #[error("failed to read notification icon {path}: {source}")]
    Icon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start_screen: StartScreen,
    pub completion_screen: bool,
    pub tick_interval: Duration,
    pub notifications: bool,
    pub sound: bool,
    pub notify_icon: Option<Vec<u8>>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_screen: StartScreen::Landing,
            completion_screen: true,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            notifications: true,
            sound: true,
            notify_icon: None,
            log_file: env::temp_dir().join(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set to a value that cannot be
    /// parsed or is out of range, or if the icon file cannot be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let start_screen = match env::var("HOURGLASS_START_SCREEN") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "landing" => StartScreen::Landing,
                "input" => StartScreen::DurationInput,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "HOURGLASS_START_SCREEN".to_string(),
                        message: format!("expected 'landing' or 'input', got '{val}'"),
                    })
                }
            },
            Err(_) => defaults.start_screen,
        };

        let completion_screen = bool_var("HOURGLASS_COMPLETION_SCREEN", defaults.completion_screen)?;
        let notifications = bool_var("HOURGLASS_NOTIFY", defaults.notifications)?;
        let sound = bool_var("HOURGLASS_SOUND", defaults.sound)?;

        let tick_interval = match env::var("HOURGLASS_TICK_MS") {
            Ok(val) => {
                let ms = val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "HOURGLASS_TICK_MS".to_string(),
                    message: format!("expected an integer, got '{val}'"),
                })?;
                if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&ms) {
                    return Err(ConfigError::InvalidValue {
                        key: "HOURGLASS_TICK_MS".to_string(),
                        message: format!(
                            "tick interval must be between {MIN_TICK_MS} and {MAX_TICK_MS}, got {ms}"
                        ),
                    });
                }
                Duration::from_millis(ms)
            }
            Err(_) => defaults.tick_interval,
        };

        let notify_icon = match env::var("HOURGLASS_NOTIFY_ICON") {
            Ok(path) => {
                let path = PathBuf::from(path);
                let bytes = std::fs::read(&path).map_err(|source| ConfigError::Icon {
                    path: path.clone(),
                    source,
                })?;
                Some(bytes)
            }
            Err(_) => None,
        };

        let log_file = env::var("HOURGLASS_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        Ok(Self {
            start_screen,
            completion_screen,
            tick_interval,
            notifications,
            sound,
            notify_icon,
            log_file,
        })
    }

    /// The state machine options this configuration selects.
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            start_screen: self.start_screen,
            completion_screen: self.completion_screen,
            tick_interval: self.tick_interval,
            notify_icon: self.notify_icon.clone(),
        }
    }
}

fn bool_var(key: &str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected true or false, got '{val}'"),
            }),
        },
        Err(_) => Ok(default),
    }
}
