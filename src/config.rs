//! Configuration management for the contact book assistant.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::address_book::WEEK_DAYS;
use std::env;

/// Longest birthday window accepted from the environment.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before each command
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS`: Birthday window in days (default: 7)
    /// - `CONTACT_BOOK_PROMPT`: Command prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or(defaults.log_level);
        let birthday_window_days =
            Self::parse_env_u32("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or(defaults.prompt);

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            birthday_window_days,
            prompt,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
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
            birthday_window_days: WEEK_DAYS,
            prompt: "Enter a command: ".to_string(),
        }
    }
}
