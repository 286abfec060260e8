//! Runtime configuration.
//!
//! Defaults work out of the box; each field can be overridden from the
//! environment.

use std::time::Duration;

use countries_lib::DEFAULT_ENDPOINT;
use log::LevelFilter;

/// Overrides the country endpoint URL.
pub const ENDPOINT_VAR: &str = "COUNTRIES_ENDPOINT";
/// Overrides the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "COUNTRIES_TIMEOUT_SECS";
/// Overrides the TCP connect timeout, in whole seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "COUNTRIES_CONNECT_TIMEOUT_SECS";
/// Overrides the log level (off, error, warn, info, debug, trace).
pub const LOG_VAR: &str = "COUNTRIES_LOG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be one of off, error, warn, info, debug, trace; got '{value}'")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the country list is fetched from.
    pub endpoint: String,
    /// Whole-request timeout for the fetch.
    pub timeout: Duration,
    /// Limit on establishing the connection alone.
    pub connect_timeout: Duration,
    /// Minimum level written to the log file.
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            log_level: LevelFilter::Debug,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variables; unset ones keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::Empty { var: ENDPOINT_VAR });
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_secs(TIMEOUT_VAR, value)?;
        }

        if let Some(value) = lookup(CONNECT_TIMEOUT_VAR) {
            config.connect_timeout = parse_secs(CONNECT_TIMEOUT_VAR, value)?;
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel { var: LOG_VAR, value: value.clone() })?;
        }

        Ok(config)
    }
}

fn parse_secs(var: &'static str, value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value }),
    }
}
