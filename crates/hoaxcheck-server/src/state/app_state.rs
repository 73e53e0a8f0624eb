use hoaxcheck_classifiers::{Bundles, ClassifierRegistry};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Classifier per text domain
    pub registry: Arc<ClassifierRegistry>,

    /// Prometheus renderer, present when the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(registry: ClassifierRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            metrics: None,
        }
    }

    /// State serving both domains from loaded bundles
    pub fn from_bundles(bundles: &Bundles) -> Self {
        Self::new(ClassifierRegistry::from_bundles(bundles))
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
