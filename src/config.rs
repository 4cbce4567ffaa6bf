//! Configuration management for the contact book.
//!
//! All variables are optional with defaults, so the tool runs with a bare
//! environment. A `.env` file is honored when present; loading it never
//! touches stdout, which the REPL owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of days covered by the `birthdays` command.
const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window in days
    ///   (default: 7, must be at least 1)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days == 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            log_level,
            birthday_window_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}
