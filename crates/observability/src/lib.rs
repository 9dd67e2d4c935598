//! Tracing/logging setup shared by binaries.

/// Environment-driven log configuration.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};

/// Initialize process-wide logging from the environment, with `format`
/// taking precedence over `PIZZERIA_LOG_FORMAT`.
///
/// Logging is always installed: a bad environment value falls back to the
/// defaults and the error is returned so the caller can report it once the
/// subscriber is live. Subsequent calls are no-ops.
pub fn init(format: Option<LogFormat>) -> Result<(), ConfigError> {
    match LogConfig::from_env_with(format) {
        Ok(config) => {
            tracing::init(&config);
            Ok(())
        }
        Err(err) => {
            tracing::init(&LogConfig::default());
            Err(err)
        }
    }
}
