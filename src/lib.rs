#![allow(clippy::doc_markdown)] // Allow technical terms like LUIS in docs
#![allow(clippy::must_use_candidate)] // Allow accessors without must_use when context is clear

//! # Bot Services
//!
//! Validated, immutable registry of the external service clients a
//! conversational bot depends on.
//!
//! ## Overview
//!
//! A bot typically talks to a telemetry backend and to one or more
//! natural-language recognizers. Those clients are constructed once at
//! startup from configuration; this crate holds them in a [`BotServices`]
//! registry that rejects missing dependencies up front and afterwards
//! hands out shared references to any number of concurrent readers.
//!
//! Recognition algorithms and telemetry transport are not implemented here.
//! They are reached through the [`Recognizer`] and [`TelemetrySink`]
//! capability traits.
//!
//! ## Module Organization
//!
//! - [`registry`] - The `BotServices` registry and startup wiring
//! - [`recognizer`] - Recognizer capability and result types
//! - [`telemetry`] - Telemetry sink capability and local sinks
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use bot_services::{
//!     BotServices, BotServicesError, NullTelemetrySink, RecognizerMap, TelemetrySink,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), BotServicesError> {
//! let services = Arc::new(BotServices::new(
//!     Some(Arc::new(NullTelemetrySink)),
//!     Some(RecognizerMap::new()),
//! )?);
//!
//! services.telemetry_client().track_metric("StartupCompleted", 1.0);
//! assert!(services.recognizer("default").is_err());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod recognizer;
pub mod registry;
pub mod telemetry;

pub use config::{RecognizerConfig, ServicesConfig, TelemetryConfig};
pub use error::{BotServicesError, Result};
pub use recognizer::{IntentScore, Recognizer, RecognizerMap, RecognizerResult};
pub use registry::{BotServices, BotServicesBuilder, ServicesStats};
pub use telemetry::{
    NullTelemetrySink, SeverityLevel, TelemetryRecord, TelemetrySink, TracingTelemetrySink,
};
