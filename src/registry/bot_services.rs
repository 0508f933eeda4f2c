//! # Bot Services Registry
//!
//! Immutable holder for the external service clients a bot depends on: one
//! telemetry sink and a named set of recognizers.
//!
//! ## Overview
//!
//! The registry is built once at startup from clients that were already
//! constructed elsewhere, then shared read-only (usually behind an `Arc`)
//! with every component that needs a client. It performs no I/O and has no
//! mutation methods, so concurrent readers need no locking.
//!
//! ## Usage
//!
//! ```rust
//! use bot_services::registry::BotServices;
//! use bot_services::telemetry::NullTelemetrySink;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let services = BotServices::builder()
//!     .telemetry_client(Arc::new(NullTelemetrySink))
//!     .recognizers(Default::default())
//!     .build()?;
//!
//! assert!(services.get_recognizer("default").is_none());
//! # Ok(())
//! # }
//! ```

use crate::error::{BotServicesError, Result};
use crate::logging::log_services_operation;
use crate::recognizer::{Recognizer, RecognizerMap};
use crate::telemetry::TelemetrySink;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Argument name reported when the telemetry client is missing
pub const TELEMETRY_CLIENT_ARG: &str = "telemetry_client";
/// Argument name reported when the recognizer map is missing
pub const RECOGNIZERS_ARG: &str = "recognizers";

/// Read-only view of what the registry holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesStats {
    pub total_recognizers: usize,
    pub recognizer_names: Vec<String>,
}

/// Validated, immutable references to the bot's external services
#[derive(Debug, Clone)]
pub struct BotServices {
    telemetry_client: Arc<dyn TelemetrySink>,
    recognizers: RecognizerMap,
}

impl BotServices {
    /// Create a registry from already-constructed clients.
    ///
    /// `None` stands for an absent dependency and is rejected with
    /// [`BotServicesError::InvalidArgument`] naming the missing argument.
    /// An empty recognizer map is accepted.
    pub fn new(
        telemetry_client: Option<Arc<dyn TelemetrySink>>,
        recognizers: Option<RecognizerMap>,
    ) -> Result<Self> {
        let telemetry_client = telemetry_client
            .ok_or_else(|| BotServicesError::invalid_argument(TELEMETRY_CLIENT_ARG))?;
        let recognizers =
            recognizers.ok_or_else(|| BotServicesError::invalid_argument(RECOGNIZERS_ARG))?;

        log_services_operation(
            "construct",
            None,
            Some(recognizers.len()),
            "success",
            None,
        );

        Ok(Self {
            telemetry_client,
            recognizers,
        })
    }

    pub fn builder() -> BotServicesBuilder {
        BotServicesBuilder::default()
    }

    /// The telemetry sink every component should report through
    pub fn telemetry_client(&self) -> &Arc<dyn TelemetrySink> {
        &self.telemetry_client
    }

    /// Look up a recognizer by name
    pub fn recognizer(&self, name: &str) -> Result<&Arc<dyn Recognizer>> {
        self.recognizers.get(name).ok_or_else(|| {
            debug!(recognizer = %name, "Recognizer lookup missed");
            BotServicesError::RecognizerNotFound(name.to_string())
        })
    }

    /// Look up a recognizer by name, `None` when unregistered
    pub fn get_recognizer(&self, name: &str) -> Option<&Arc<dyn Recognizer>> {
        self.recognizers.get(name)
    }

    pub fn has_recognizer(&self, name: &str) -> bool {
        self.recognizers.contains_key(name)
    }

    pub fn recognizers(&self) -> &HashMap<String, Arc<dyn Recognizer>> {
        &self.recognizers
    }

    /// Registered recognizer names, sorted
    pub fn recognizer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recognizers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn stats(&self) -> ServicesStats {
        ServicesStats {
            total_recognizers: self.recognizers.len(),
            recognizer_names: self
                .recognizer_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Step-by-step construction of [`BotServices`].
///
/// Fields left unset are reported by [`BotServicesBuilder::build`] exactly
/// as [`BotServices::new`] reports `None`.
#[derive(Debug, Default)]
pub struct BotServicesBuilder {
    telemetry_client: Option<Arc<dyn TelemetrySink>>,
    recognizers: Option<RecognizerMap>,
}

impl BotServicesBuilder {
    pub fn telemetry_client(mut self, telemetry_client: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry_client = Some(telemetry_client);
        self
    }

    /// Replace the whole recognizer map
    pub fn recognizers(mut self, recognizers: RecognizerMap) -> Self {
        self.recognizers = Some(recognizers);
        self
    }

    /// Add one named recognizer, starting an empty map if none was set
    pub fn recognizer(mut self, name: impl Into<String>, recognizer: Arc<dyn Recognizer>) -> Self {
        self.recognizers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), recognizer);
        self
    }

    pub fn build(self) -> Result<BotServices> {
        BotServices::new(self.telemetry_client, self.recognizers)
    }
}
