use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the filter directive (e.g. `info,pizzeria_assembly=debug`).
pub const FILTER_VAR: &str = "RUST_LOG";

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "PIZZERIA_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format `{0}` (expected json, pretty or compact)")]
    UnknownFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines with timestamps.
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read `RUST_LOG` and `PIZZERIA_LOG_FORMAT`; unset values keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(None)
    }

    /// Like `from_env`, but a given `format` wins and `PIZZERIA_LOG_FORMAT`
    /// is not consulted.
    pub fn from_env_with(format: Option<LogFormat>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), format)
    }

    /// Same as `from_env_with`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F, format: Option<LogFormat>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        config.format = match (format, lookup(FORMAT_VAR)) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => config.format,
        };

        Ok(config)
    }
}
