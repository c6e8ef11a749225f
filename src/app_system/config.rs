use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const CHANNEL_BUFFER_VAR: &str = "RESTAURANT_CHANNEL_BUFFER";
pub const SEED_MOCK_DATA_VAR: &str = "RESTAURANT_SEED_MOCK_DATA";
pub const LOG_FILTER_VAR: &str = "RESTAURANT_LOG_FILTER";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Mailbox size of each resource actor.
    pub channel_buffer: usize,
    /// Load the mock dishes, users and orders at startup.
    pub seed_mock_data: bool,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            seed_mock_data: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let channel_buffer = match lookup(CHANNEL_BUFFER_VAR) {
            Some(value) => match usize::from_str(value.trim()) {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidValue { var: CHANNEL_BUFFER_VAR, value }),
            },
            None => defaults.channel_buffer,
        };
        let seed_mock_data = match lookup(SEED_MOCK_DATA_VAR) {
            Some(value) => parse_flag(&value)
                .ok_or(ConfigError::InvalidValue { var: SEED_MOCK_DATA_VAR, value })?,
            None => defaults.seed_mock_data,
        };
        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self { channel_buffer, seed_mock_data, log_filter })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
