//! Client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured service URL.
pub const BASE_URL_ENV: &str = "ARCADE_BASE_URL";

/// Settings for talking to the scoring service and showing notices.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Scoring service root, without trailing slash.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// How long a toast stays visible.
    #[serde(default = "default_toast_duration_ms")]
    toast_duration_ms: u64,
}

#[instrument]
fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

#[instrument]
fn default_request_timeout_secs() -> u64 {
    10
}

#[instrument]
fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// File if given, else defaults; then the [`BASE_URL_ENV`] override.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_base_url(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Replaces the service URL when `url` is present.
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Toast lifetime as a [`Duration`].
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArcadeConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ArcadeConfig = toml::from_str("request_timeout_secs = 3").unwrap();
        assert_eq!(*config.request_timeout_secs(), 3);
        assert_eq!(config.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let config = ArcadeConfig::default().with_base_url(Some("http://scores:9000/api/".into()));
        assert_eq!(config.base_url(), "http://scores:9000/api");
        let unchanged = config.clone().with_base_url(None);
        assert_eq!(unchanged, config);
    }
}
