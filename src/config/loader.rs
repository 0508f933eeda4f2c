//! Configuration Loader
//!
//! Environment-variable loading for [`ServicesConfig`], plus sanitization so
//! loaded settings can be logged without leaking keys.

use super::{ServicesConfig, DEFAULT_SERVICE_NAME};
use crate::error::Result;
use config::{Config, Environment};
use std::collections::HashMap;
use std::env;
use tracing::debug;

pub const ENV_PREFIX: &str = "BOT";
pub const ENV_SEPARATOR: &str = "__";

const SENSITIVE_PATTERNS: [&str; 5] = ["key", "secret", "password", "token", "credential"];

/// Detect current environment from environment variables
pub fn detect_environment() -> String {
    env::var("BOT_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
        .to_lowercase()
}

impl ServicesConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment. Keys use the same `BOT__...` names.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(vars.map(|vars| vars.into_iter().collect()));

        let config: ServicesConfig = Config::builder()
            .set_default("environment", detect_environment())?
            .set_default("telemetry.enabled", true)?
            .set_default("telemetry.service_name", DEFAULT_SERVICE_NAME)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        let sanitized = config.sanitized()?;
        debug!(
            environment = %config.environment,
            config = %sanitized,
            "Bot services configuration loaded"
        );

        Ok(config)
    }

    /// JSON view of the configuration with sensitive fields masked
    pub fn sanitized(&self) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        sanitize_json_recursive(&mut value);
        Ok(value)
    }
}

fn sanitize_json_recursive(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                let key_lower = key.to_lowercase();
                // Only leaves are masked; map keys such as recognizer names are not secrets
                let is_leaf = !matches!(
                    val,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_)
                );
                let is_sensitive = is_leaf
                    && SENSITIVE_PATTERNS
                        .iter()
                        .any(|pattern| key_lower.contains(pattern));

                if is_sensitive {
                    let masked = match &*val {
                        serde_json::Value::Null => serde_json::Value::Null,
                        serde_json::Value::String(s) if s.is_empty() => {
                            serde_json::Value::String("[EMPTY]".to_string())
                        }
                        serde_json::Value::String(s) if s.chars().count() > 4 => {
                            let chars: Vec<char> = s.chars().collect();
                            let head: String = chars[..2].iter().collect();
                            let tail: String = chars[chars.len() - 2..].iter().collect();
                            serde_json::Value::String(format!("[MASKED: {head}***{tail}]"))
                        }
                        _ => serde_json::Value::String("[MASKED]".to_string()),
                    };
                    *val = masked;
                } else {
                    sanitize_json_recursive(val);
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                sanitize_json_recursive(item);
            }
        }
        _ => {}
    }
}
