//! Startup configuration read from the mount element.
//!
//! The page hosting the bundle passes settings as `data-*` attributes on the
//! `#app` element:
//!
//! - `data-api-base`: prefix for API paths, default same origin
//! - `data-message-timeout-ms`: status message lifetime, default 5000
//! - `data-log-level`: `error`, `warn`, `info` (default), `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_ATTR: &str = "data-api-base";
pub const MESSAGE_TIMEOUT_ATTR: &str = "data-message-timeout-ms";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Configuration could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub api_base: String,
    pub message_timeout_ms: u64,
    pub log_level: log::Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl BoardConfig {
    /// Build config from a key lookup (attribute name → value).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unrecognised level.
    /// An unparseable timeout falls back to the default instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = lookup(API_BASE_ATTR)
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();
        let message_timeout_ms = parse_u64(lookup(MESSAGE_TIMEOUT_ATTR).as_deref(), DEFAULT_MESSAGE_TIMEOUT_MS);
        let log_level = parse_log_level(lookup(LOG_LEVEL_ATTR).as_deref())?;

        Ok(Self { api_base, message_timeout_ms, log_level })
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.message_timeout_ms)
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => log::Level::from_str(value).map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
