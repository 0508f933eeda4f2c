//! Error types for the bot services registry.
//!

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotServicesError {
    /// A required dependency was not supplied at construction time
    #[error("Invalid argument: {argument} must be provided")]
    InvalidArgument { argument: &'static str },
    /// No recognizer is registered under the requested name
    #[error("Recognizer not found: {0}")]
    RecognizerNotFound(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Recognition error: {0}")]
    RecognitionError(String),
}

impl BotServicesError {
    pub fn invalid_argument(argument: &'static str) -> Self {
        BotServicesError::InvalidArgument { argument }
    }

    /// Name of the offending argument for `InvalidArgument` errors
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            BotServicesError::InvalidArgument { argument } => Some(argument),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BotServicesError::RecognizerNotFound(_))
    }
}

impl From<config::ConfigError> for BotServicesError {
    fn from(error: config::ConfigError) -> Self {
        BotServicesError::ConfigurationError(error.to_string())
    }
}

impl From<serde_json::Error> for BotServicesError {
    fn from(error: serde_json::Error) -> Self {
        BotServicesError::ConfigurationError(format!("JSON serialization error: {error}"))
    }
}

pub type Result<T> = std::result::Result<T, BotServicesError>;
