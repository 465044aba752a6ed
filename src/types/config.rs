//! Configuration structures.
//!
//! Configuration is loaded from environment variables or a JSON document.

use serde::{Deserialize, Serialize};

use crate::messages;
use crate::types::Result;
use crate::validation::check_not_empty;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PARAM_CHECK_LOG_LEVEL";

/// Environment variable selecting the log format (`json` or `compact`).
pub const ENV_LOG_FORMAT: &str = "PARAM_CHECK_LOG_FORMAT";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| messages::invalid_usage(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `PARAM_CHECK_LOG_LEVEL` / `PARAM_CHECK_LOG_FORMAT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.observability.log_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let level = check_not_empty(
            "observability.log_level",
            self.observability.log_level.as_str(),
        )?;
        if !LOG_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
            return Err(messages::invalid_usage(format!(
                "unknown log level '{level}'"
            )));
        }
        Ok(())
    }
}
