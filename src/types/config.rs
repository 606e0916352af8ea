//! Configuration structures.
//!
//! Configuration is loaded from an optional TOML file and then overridden by
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Error, Language, Result};

/// Environment variable selecting the prompt language.
pub const ENV_LANG: &str = "EMPTY_GUARD_LANG";
/// Environment variable enabling non-interactive confirmation.
pub const ENV_ASSUME_YES: &str = "EMPTY_GUARD_ASSUME_YES";
/// Environment variable selecting the log format (`json` or plain).
pub const ENV_LOG_FORMAT: &str = "EMPTY_GUARD_LOG_FORMAT";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Guard behaviour.
    #[serde(default)]
    pub guard: GuardConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Guard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GuardConfig {
    /// Language of the confirmation prompt.
    pub language: Language,

    /// Confirm empty-like values without asking (non-interactive runs).
    pub assume_yes: bool,
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
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_LANG) {
            self.guard.language = code.parse().map_err(|_| {
                Error::config(format!("{} must be de or en, got '{}'", ENV_LANG, code.trim()))
            })?;
        }
        if let Some(raw) = lookup(ENV_ASSUME_YES) {
            self.guard.assume_yes = parse_flag(ENV_ASSUME_YES, &raw)?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
