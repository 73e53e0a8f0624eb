//! Stub classifiers for exercising the presentation layer without artifacts

#![allow(dead_code)]

use hoaxcheck_classifiers::{Classifier, ClassifierRegistry};
use hoaxcheck_core::{Domain, Prediction, ProbabilityDistribution};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Returns a fixed distribution and counts how often it was asked
pub struct CountingClassifier {
    domain: Domain,
    probabilities: ProbabilityDistribution,
    calls: AtomicUsize,
}

impl CountingClassifier {
    pub fn new(domain: Domain, real: f64, hoax: f64) -> Self {
        Self {
            domain,
            probabilities: ProbabilityDistribution::new(real, hoax),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for CountingClassifier {
    fn predict(&self, _cleaned: &str) -> Prediction {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Prediction::from_distribution(self.probabilities)
    }

    fn name(&self) -> &str {
        "counting-stub"
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}

/// Registry with a hoax-leaning news stub and a real-leaning social stub
pub fn stub_registry() -> (ClassifierRegistry, Arc<CountingClassifier>, Arc<CountingClassifier>) {
    let news = Arc::new(CountingClassifier::new(Domain::News, 0.0247, 0.9753));
    let social = Arc::new(CountingClassifier::new(Domain::Social, 0.8125, 0.1875));

    let mut registry = ClassifierRegistry::new();
    registry.register(Domain::News, news.clone());
    registry.register(Domain::Social, social.clone());

    (registry, news, social)
}

/// Write a tiny but complete artifact set (count vectorizers) into `dir`
pub fn write_artifacts(dir: &std::path::Path) {
    let vectorizer = serde_json::json!({
        "format_version": 1,
        "kind": "count",
        "vocabulary": { "resmi": 0, "klarifikasi": 1, "viral": 2, "sebarkan": 3 }
    });
    let model = serde_json::json!({
        "format_version": 1,
        "kind": "multinomial_nb",
        "classes": [0, 1],
        "class_log_prior": [-0.6931471805599453, -0.6931471805599453],
        "feature_log_prob": [
            [-0.9, -1.0, -2.5, -2.6],
            [-2.5, -2.6, -0.9, -1.0]
        ]
    });

    for stem in ["berita", "sosmed"] {
        std::fs::write(
            dir.join(format!("model_{stem}.json")),
            serde_json::to_vec(&model).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(format!("vectorizer_{stem}.json")),
            serde_json::to_vec(&vectorizer).unwrap(),
        )
        .unwrap();
    }
}
