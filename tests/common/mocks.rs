//! Test doubles for the registry's external collaborators.

use async_trait::async_trait;
use bot_services::{
    BotServicesError, Recognizer, RecognizerResult, Result, TelemetryRecord, TelemetrySink,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Telemetry sink that keeps every submitted record in memory
#[derive(Debug, Default)]
pub struct RecordingTelemetrySink {
    records: Mutex<Vec<TelemetryRecord>>,
    flushes: AtomicUsize,
}

impl RecordingTelemetrySink {
    pub fn records(&self) -> Vec<TelemetryRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl TelemetrySink for RecordingTelemetrySink {
    fn submit(&self, record: TelemetryRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Recognizer answering from a fixed utterance -> intent table
#[derive(Debug, Default)]
pub struct CannedRecognizer {
    answers: HashMap<String, (String, f64)>,
    calls: AtomicUsize,
}

impl CannedRecognizer {
    pub fn with_answer(mut self, utterance: &str, intent: &str, score: f64) -> Self {
        self.answers
            .insert(utterance.to_string(), (intent.to_string(), score));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Recognizer for CannedRecognizer {
    async fn recognize(&self, utterance: &str) -> Result<RecognizerResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answers.get(utterance) {
            Some((intent, score)) => {
                Ok(RecognizerResult::new(utterance).with_intent(intent.clone(), *score))
            }
            None if utterance.trim().is_empty() => Err(BotServicesError::RecognitionError(
                "utterance is empty".to_string(),
            )),
            None => Ok(RecognizerResult::new(utterance).with_intent("None", 1.0)),
        }
    }
}
