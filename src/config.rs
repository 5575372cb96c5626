//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_WINDOW_DAYS;
use crate::repositories::DEFAULT_STORAGE_PATH;
use std::env;
use std::path::PathBuf;

/// Longest birthday look-ahead accepted from the environment.
const MAX_WINDOW_DAYS: i64 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is stored (default: "addressbook.json")
    pub address_book_path: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub upcoming_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Storage file path (default: "addressbook.json")
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday look-ahead in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let address_book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        let upcoming_window_days =
            Self::parse_env_i64("UPCOMING_BIRTHDAYS_DAYS", UPCOMING_WINDOW_DAYS)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&upcoming_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            address_book_path,
            upcoming_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            upcoming_window_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
