//! # Startup Wiring
//!
//! Builds a [`BotServices`] from [`ServicesConfig`]. The telemetry sink is
//! picked from configuration; recognizer clients are created by a factory
//! the host application supplies, since this crate does not implement any
//! recognition backend.

use super::bot_services::BotServices;
use crate::config::{RecognizerConfig, ServicesConfig};
use crate::error::Result;
use crate::logging::log_error;
use crate::recognizer::{Recognizer, RecognizerMap};
use crate::telemetry::{NullTelemetrySink, TelemetrySink, TracingTelemetrySink};
use std::sync::Arc;
use tracing::info;

/// Telemetry sink matching the configuration
pub fn telemetry_sink_from_config(config: &ServicesConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry.enabled {
        Arc::new(TracingTelemetrySink::new(
            config.telemetry.service_name.clone(),
        ))
    } else {
        Arc::new(NullTelemetrySink)
    }
}

impl BotServices {
    /// Validate `config`, then construct every configured client.
    ///
    /// `recognizer_factory` is called once per recognizer entry, in name
    /// order; the first error aborts startup and is returned unchanged.
    pub fn from_config<F>(config: &ServicesConfig, mut recognizer_factory: F) -> Result<Self>
    where
        F: FnMut(&str, &RecognizerConfig) -> Result<Arc<dyn Recognizer>>,
    {
        config.validate().inspect_err(|e| {
            log_error("BotServices", "from_config", &e.to_string(), Some("validation"));
        })?;

        let mut recognizers = RecognizerMap::with_capacity(config.recognizers.len());
        for name in config.recognizer_names() {
            let entry = &config.recognizers[name];
            let recognizer = recognizer_factory(name, entry).inspect_err(|e| {
                log_error("BotServices", "from_config", &e.to_string(), Some(name));
            })?;
            recognizers.insert(name.to_string(), recognizer);
        }

        let telemetry_client = telemetry_sink_from_config(config);

        info!(
            environment = %config.environment,
            telemetry_enabled = config.telemetry.enabled,
            recognizers = recognizers.len(),
            "Bot services wired from configuration"
        );

        BotServices::new(Some(telemetry_client), Some(recognizers))
    }
}
