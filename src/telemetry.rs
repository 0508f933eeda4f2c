//! # Telemetry Sink Capability
//!
//! The seam through which the bot submits custom events, metrics and traces
//! to an observability backend. Batching, transport and authentication are
//! the implementor's responsibility; this module only defines the record
//! shapes and two local sinks.
//!
//! ## Usage
//!
//! ```rust
//! use bot_services::telemetry::{NullTelemetrySink, TelemetrySink};
//! use std::collections::HashMap;
//!
//! let sink = NullTelemetrySink;
//! sink.track_event("WelcomeShown", HashMap::new(), HashMap::new());
//! sink.track_metric("TurnLatencyMs", 42.0);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Severity attached to trace records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Verbose,
    Information,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityLevel::Verbose => write!(f, "verbose"),
            SeverityLevel::Information => write!(f, "information"),
            SeverityLevel::Warning => write!(f, "warning"),
            SeverityLevel::Error => write!(f, "error"),
            SeverityLevel::Critical => write!(f, "critical"),
        }
    }
}

/// A single observability record handed to a sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TelemetryRecord {
    Event {
        name: String,
        properties: HashMap<String, String>,
        metrics: HashMap<String, f64>,
    },
    Metric {
        name: String,
        value: f64,
        properties: HashMap<String, String>,
    },
    Trace {
        message: String,
        severity: SeverityLevel,
        properties: HashMap<String, String>,
    },
}

impl TelemetryRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            TelemetryRecord::Event { .. } => "event",
            TelemetryRecord::Metric { .. } => "metric",
            TelemetryRecord::Trace { .. } => "trace",
        }
    }

    /// Event or metric name, or the trace message
    pub fn name(&self) -> &str {
        match self {
            TelemetryRecord::Event { name, .. } | TelemetryRecord::Metric { name, .. } => name,
            TelemetryRecord::Trace { message, .. } => message,
        }
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        match self {
            TelemetryRecord::Event { properties, .. }
            | TelemetryRecord::Metric { properties, .. }
            | TelemetryRecord::Trace { properties, .. } => properties,
        }
    }
}

/// Capability for emitting telemetry to an external backend.
///
/// Implementors must be shareable across threads; the registry hands out
/// the same `Arc` to every consumer.
pub trait TelemetrySink: Send + Sync + fmt::Debug {
    fn submit(&self, record: TelemetryRecord);

    /// Push buffered records to the backend
    fn flush(&self) {}

    fn track_event(
        &self,
        name: &str,
        properties: HashMap<String, String>,
        metrics: HashMap<String, f64>,
    ) {
        self.submit(TelemetryRecord::Event {
            name: name.to_string(),
            properties,
            metrics,
        });
    }

    fn track_metric(&self, name: &str, value: f64) {
        self.submit(TelemetryRecord::Metric {
            name: name.to_string(),
            value,
            properties: HashMap::new(),
        });
    }

    fn track_trace(&self, message: &str, severity: SeverityLevel) {
        self.submit(TelemetryRecord::Trace {
            message: message.to_string(),
            severity,
            properties: HashMap::new(),
        });
    }
}

/// Sink that drops every record. Installed when telemetry is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetrySink;

impl TelemetrySink for NullTelemetrySink {
    fn submit(&self, _record: TelemetryRecord) {}
}

/// Sink that writes every record to the `tracing` pipeline.
///
/// Useful in development and as the default when no backend is wired in;
/// whatever subscriber the process installs decides where records end up.
#[derive(Debug, Clone)]
pub struct TracingTelemetrySink {
    service_name: String,
}

impl TracingTelemetrySink {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl TelemetrySink for TracingTelemetrySink {
    fn submit(&self, record: TelemetryRecord) {
        let payload = serde_json::to_string(&record)
            .unwrap_or_else(|_| "[serialization error]".to_string());

        match &record {
            TelemetryRecord::Event { name, .. } => {
                info!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "event",
                    name = %name,
                    payload = %payload,
                    "📈 TELEMETRY_EVENT"
                );
            }
            TelemetryRecord::Metric { name, value, .. } => {
                info!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "metric",
                    name = %name,
                    value = *value,
                    payload = %payload,
                    "📈 TELEMETRY_METRIC"
                );
            }
            TelemetryRecord::Trace {
                message, severity, ..
            } => match severity {
                SeverityLevel::Verbose => debug!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "trace",
                    severity = %severity,
                    payload = %payload,
                    "{}",
                    message
                ),
                SeverityLevel::Information => info!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "trace",
                    severity = %severity,
                    payload = %payload,
                    "{}",
                    message
                ),
                SeverityLevel::Warning => warn!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "trace",
                    severity = %severity,
                    payload = %payload,
                    "{}",
                    message
                ),
                SeverityLevel::Error | SeverityLevel::Critical => error!(
                    target: "bot_services::telemetry",
                    service = %self.service_name,
                    kind = "trace",
                    severity = %severity,
                    payload = %payload,
                    "{}",
                    message
                ),
            },
        }
    }
}
