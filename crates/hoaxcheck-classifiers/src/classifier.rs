//! Classifier trait and common types

use crate::normalize::normalize;
use hoaxcheck_core::{Domain, Prediction};
use std::time::Instant;

/// Trait for all hoax classifiers.
///
/// Implementations are immutable once built and safe to share across threads.
pub trait Classifier: Send + Sync {
    /// Predict on text that has already been normalized
    fn predict(&self, cleaned: &str) -> Prediction;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Domain this classifier was trained for
    fn domain(&self) -> Domain;

    /// Normalize raw text, then predict
    fn classify(&self, raw: &str) -> ClassificationResult {
        let start = Instant::now();
        let cleaned = normalize(raw);
        let prediction = self.predict(&cleaned);

        ClassificationResult {
            prediction,
            cleaned,
            model: self.name().to_string(),
            latency_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Predicted class and class probabilities
    pub prediction: Prediction,

    /// The normalized text the model actually saw
    pub cleaned: String,

    /// Model name
    pub model: String,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Probability of the predicted class
    pub fn confidence(&self) -> f64 {
        self.prediction.confidence()
    }
}
