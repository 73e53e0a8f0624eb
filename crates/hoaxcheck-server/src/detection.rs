//! Detection request handling
//!
//! One call maps (domain, raw text) to a render-ready record. The HTTP
//! routes and the `detect` subcommand are thin adapters over [`detect`].

use crate::content;
use hoaxcheck_classifiers::{ClassificationResult, ClassifierRegistry};
use hoaxcheck_core::{Domain, PredictedClass, ProbabilityDistribution, Result};
use serde::Serialize;
use tracing::debug;

/// Result of one detection request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetectionOutcome {
    /// Prediction ran and produced a report
    Report(DetectionReport),

    /// Input was blank; no prediction was attempted
    EmptyInput(EmptyInputWarning),
}

/// Recoverable, user-facing warning for blank input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyInputWarning {
    pub domain: Domain,
    pub warning: String,
}

/// Render-ready prediction for one piece of text
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub domain: Domain,

    /// Encoded class, 0 = real, 1 = hoax
    pub class: u8,

    /// `REAL` or `HOAX`
    pub label: PredictedClass,

    /// Label with its marker emoji
    pub display_label: &'static str,

    /// `green` for real, `red` for hoax
    pub color: &'static str,

    /// Probability of the predicted class, 0..1
    pub confidence: f64,

    /// Confidence as a percentage with two decimals, e.g. `"97.53"`
    pub confidence_percent: String,

    pub probabilities: ProbabilityDistribution,

    /// Per-result note with the score embedded
    pub note: String,

    pub disclaimer: &'static str,

    pub model: String,

    pub latency_us: u64,
}

impl DetectionReport {
    pub fn new(domain: Domain, result: ClassificationResult) -> Self {
        let prediction = result.prediction;
        let confidence = prediction.confidence();
        let confidence_percent = format!("{:.2}", confidence * 100.0);
        let (display_label, color) = match prediction.class {
            PredictedClass::Real => ("REAL ✅", "green"),
            PredictedClass::Hoax => ("HOAX ❌", "red"),
        };

        Self {
            domain,
            class: prediction.class.index() as u8,
            label: prediction.class,
            display_label,
            color,
            confidence,
            note: content::result_note(&confidence_percent),
            confidence_percent,
            probabilities: prediction.probabilities,
            disclaimer: content::DISCLAIMER,
            model: result.model,
            latency_us: result.latency_us,
        }
    }
}

/// Run one detection against the classifier registered for `domain`.
///
/// Blank input short-circuits to [`DetectionOutcome::EmptyInput`] without
/// touching the classifier.
pub fn detect(registry: &ClassifierRegistry, domain: Domain, raw: &str) -> Result<DetectionOutcome> {
    if raw.trim().is_empty() {
        metrics::counter!("hoaxcheck_empty_input_total", "domain" => domain.as_str()).increment(1);
        debug!(%domain, "Empty input, skipping prediction");
        return Ok(DetectionOutcome::EmptyInput(EmptyInputWarning {
            domain,
            warning: content::empty_input_warning(domain).to_string(),
        }));
    }

    let classifier = registry.get(domain)?;
    let result = classifier.classify(raw);

    metrics::counter!(
        "hoaxcheck_detections_total",
        "domain" => domain.as_str(),
        "label" => result.prediction.class.label()
    )
    .increment(1);
    metrics::histogram!("hoaxcheck_prediction_latency_us", "domain" => domain.as_str())
        .record(result.latency_us as f64);
    debug!(
        %domain,
        input_chars = raw.chars().count(),
        cleaned_chars = result.cleaned.chars().count(),
        label = result.prediction.class.label(),
        confidence = result.confidence(),
        latency_us = result.latency_us,
        "Detection complete"
    );

    Ok(DetectionOutcome::Report(DetectionReport::new(domain, result)))
}
