//! Configuration management for the address book bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::book::{BirthdayWindowPolicy, WEEK_DAYS};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest birthday window accepted, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Prompt shown before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the address book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of the `birthdays` window in days (default: 7)
    pub birthday_window_days: u32,

    /// How birthdays are placed in the window (default: literal)
    pub birthday_window_policy: BirthdayWindowPolicy,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Prompt printed before each input line
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: window length, 1 to 366 (default: 7)
    /// - `BIRTHDAY_WINDOW_POLICY`: `literal` or `anniversary` (default: literal)
    /// - `LOG_LEVEL`: logging level (default: "error")
    /// - `PROMPT`: input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", WEEK_DAYS)?;
        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let birthday_window_policy = match env::var("BIRTHDAY_WINDOW_POLICY") {
            Ok(val) => val
                .parse::<BirthdayWindowPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_WINDOW_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => BirthdayWindowPolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Ok(Config {
            birthday_window_days,
            birthday_window_policy,
            log_level,
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
            birthday_window_days: WEEK_DAYS,
            birthday_window_policy: BirthdayWindowPolicy::Literal,
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "BIRTHDAY_WINDOW_DAYS",
        "BIRTHDAY_WINDOW_POLICY",
        "LOG_LEVEL",
        "PROMPT",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.birthday_window_policy, BirthdayWindowPolicy::Literal);
        assert_eq!(config.log_level, "error");
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BIRTHDAY_WINDOW_POLICY", "anniversary");
        guard.set("LOG_LEVEL", "debug");
        guard.set("PROMPT", "> ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(
            config.birthday_window_policy,
            BirthdayWindowPolicy::Anniversary
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    #[serial]
    fn test_config_window_days_out_of_range() {
        for bad in ["0", "367"] {
            let mut guard = EnvGuard::new();
            guard.set("BIRTHDAY_WINDOW_DAYS", bad);

            match Config::from_env() {
                Err(ConfigError::InvalidValue { var, .. }) => {
                    assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
                }
                other => panic!("Expected InvalidValue error, got: {:?}", other),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_policy() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_POLICY", "monthly");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, reason }) = result {
            assert_eq!(var, "BIRTHDAY_WINDOW_POLICY");
            assert!(reason.contains("monthly"));
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "not-a-number");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
