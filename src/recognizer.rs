//! # Recognizer Capability
//!
//! Natural-language recognizers turn an utterance into scored intents and
//! extracted entities. The recognition itself (model, training, network
//! calls) lives behind the [`Recognizer`] trait; this module only defines
//! the result shape the bot consumes.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Named recognizers as supplied by startup configuration
pub type RecognizerMap = HashMap<String, Arc<dyn Recognizer>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub score: f64,
}

/// Outcome of recognizing a single utterance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecognizerResult {
    pub text: String,
    pub altered_text: Option<String>,
    pub intents: HashMap<String, IntentScore>,
    pub entities: serde_json::Value,
}

impl RecognizerResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            altered_text: None,
            intents: HashMap::new(),
            entities: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>, score: f64) -> Self {
        self.intents.insert(intent.into(), IntentScore { score });
        self
    }

    pub fn with_entities(mut self, entities: serde_json::Value) -> Self {
        self.entities = entities;
        self
    }

    /// Highest scoring intent. Equal scores resolve to the lexically
    /// smallest intent name so the answer does not depend on map order.
    pub fn top_scoring_intent(&self) -> Option<(&str, f64)> {
        self.intents
            .iter()
            .map(|(name, intent)| (name.as_str(), intent.score))
            .max_by(|(a_name, a_score), (b_name, b_score)| {
                a_score
                    .total_cmp(b_score)
                    .then_with(|| b_name.cmp(a_name))
            })
    }

    /// Top intent name, or `default` when nothing scores at least `min_score`
    pub fn top_intent_or<'a>(&'a self, default: &'a str, min_score: f64) -> &'a str {
        match self.top_scoring_intent() {
            Some((name, score)) if score >= min_score => name,
            _ => default,
        }
    }
}

/// Capability that maps natural-language text to intents and entities.
#[async_trait]
pub trait Recognizer: Send + Sync + fmt::Debug {
    async fn recognize(&self, utterance: &str) -> Result<RecognizerResult>;
}
