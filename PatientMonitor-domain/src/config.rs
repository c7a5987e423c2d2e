//! Monitor configuration
//! Settings are read from environment variables, optionally seeded from a `.env` file

use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_VAR: &str = "PATIENT_MONITOR_LOG";

/// Environment variable selecting the alert backend
pub const ALERT_TARGET_VAR: &str = "PATIENT_MONITOR_ALERT_TARGET";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be interpreted
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Where alerts are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertTarget {
    /// Emit alerts as warning-level tracing events
    #[default]
    Log,
    /// Print alerts on standard output
    Console,
}

impl FromStr for AlertTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(AlertTarget::Log),
            "console" | "stdout" => Ok(AlertTarget::Console),
            _ => Err(ConfigError::InvalidValue {
                key: ALERT_TARGET_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration for the monitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Tracing filter directive, e.g. `info` or `patient_monitor_domain=debug`
    pub log_filter: String,
    /// Alert backend
    pub alert_target: AlertTarget,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            alert_target: AlertTarget::default(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if it exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Unset or empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_filter = non_empty(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);
        let alert_target = match non_empty(ALERT_TARGET_VAR) {
            Some(value) => value.parse()?,
            None => defaults.alert_target,
        };

        debug!("Loaded monitor config: log_filter={}, alert_target={:?}", log_filter, alert_target);

        Ok(Self {
            log_filter,
            alert_target,
        })
    }
}
