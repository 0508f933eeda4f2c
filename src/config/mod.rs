//! # Bot Services Configuration
//!
//! Settings describing which external services the bot should be wired to
//! at startup: whether telemetry is enabled and under what service name, and
//! the named set of recognizer applications.
//!
//! Values come from process environment variables only (prefix `BOT`,
//! nested keys separated by `__`); no configuration files are read.
//!
//! ```text
//! BOT__ENVIRONMENT=production
//! BOT__TELEMETRY__ENABLED=true
//! BOT__TELEMETRY__SERVICE_NAME=luis-bot
//! BOT__RECOGNIZERS__DEFAULT__APP_ID=3f1e...
//! BOT__RECOGNIZERS__DEFAULT__ENDPOINT=https://westus.api.cognitive.microsoft.com
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bot_services::config::ServicesConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServicesConfig::from_env()?;
//! config.validate()?;
//! println!("{} recognizers configured", config.recognizers.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::error::{BotServicesError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use loader::{detect_environment, ENV_PREFIX, ENV_SEPARATOR};

pub const DEFAULT_SERVICE_NAME: &str = "bot-services";

/// Root configuration for the service registry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServicesConfig {
    /// Deployment environment (development, test, production)
    pub environment: String,

    /// Telemetry sink settings
    pub telemetry: TelemetryConfig,

    /// Recognizer applications keyed by the name the bot looks them up by
    #[serde(default)]
    pub recognizers: HashMap<String, RecognizerConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Backend key, handed through to whichever sink is installed
    #[serde(default)]
    pub instrumentation_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecognizerConfig {
    pub app_id: String,
    pub endpoint: String,
    #[serde(default)]
    pub endpoint_key: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_name: default_service_name(),
            instrumentation_key: None,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            telemetry: TelemetryConfig::default(),
            recognizers: HashMap::new(),
        }
    }
}

impl ServicesConfig {
    /// Check that every entry is usable before any client is constructed
    pub fn validate(&self) -> Result<()> {
        if self.telemetry.enabled && self.telemetry.service_name.trim().is_empty() {
            return Err(BotServicesError::ConfigurationError(
                "telemetry.service_name must not be empty when telemetry is enabled".to_string(),
            ));
        }

        for (name, recognizer) in &self.recognizers {
            recognizer.validate(name)?;
        }

        Ok(())
    }

    /// Recognizer names in a stable order
    pub fn recognizer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recognizers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl RecognizerConfig {
    pub fn new(app_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            endpoint: endpoint.into(),
            endpoint_key: None,
            region: None,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(BotServicesError::ConfigurationError(format!(
                "recognizers.{name}.app_id must not be empty"
            )));
        }
        if self.endpoint.trim().is_empty() {
            return Err(BotServicesError::ConfigurationError(format!(
                "recognizers.{name}.endpoint must not be empty"
            )));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(BotServicesError::ConfigurationError(format!(
                "recognizers.{name}.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServicesConfig::default();
        assert!(config.telemetry.enabled);
        assert_eq!(config.telemetry.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.recognizers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_incomplete_recognizer() {
        let mut config = ServicesConfig::default();
        config
            .recognizers
            .insert("default".to_string(), RecognizerConfig::new("", "https://example.test"));

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            BotServicesError::ConfigurationError(
                "recognizers.default.app_id must not be empty".to_string()
            )
        );
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = ServicesConfig::default();
        config
            .recognizers
            .insert("default".to_string(), RecognizerConfig::new("app", "westus"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_telemetry_skips_service_name_check() {
        let mut config = ServicesConfig::default();
        config.telemetry.enabled = false;
        config.telemetry.service_name = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_recognizer_names_sorted() {
        let mut config = ServicesConfig::default();
        for name in ["weather", "default", "booking"] {
            config.recognizers.insert(
                name.to_string(),
                RecognizerConfig::new("app", "https://example.test"),
            );
        }
        assert_eq!(config.recognizer_names(), vec!["booking", "default", "weather"]);
    }
}
