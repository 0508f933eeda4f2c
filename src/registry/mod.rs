//! # Service Registry
//!
//! The immutable registry of external service clients and the startup
//! wiring that fills it from configuration.
//!
//! ## Architecture
//!
//! ```text
//! Service Registry
//! ├── BotServices          (telemetry sink + named recognizers, read-only)
//! ├── BotServicesBuilder   (incremental construction, same validation)
//! └── bootstrap            (ServicesConfig -> BotServices)
//! ```
//!
//! The registry is never global: construct it once and pass an
//! `Arc<BotServices>` to whatever needs it.

pub mod bootstrap;
pub mod bot_services;

pub use bootstrap::telemetry_sink_from_config;
pub use bot_services::{
    BotServices, BotServicesBuilder, ServicesStats, RECOGNIZERS_ARG, TELEMETRY_CLIENT_ARG,
};
