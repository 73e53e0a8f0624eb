//! Classifier registry keyed by text domain

use crate::classifier::Classifier;
use crate::loader::Bundles;
use hoaxcheck_core::{Domain, Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only lookup from domain to the classifier serving it
#[derive(Clone, Default)]
pub struct ClassifierRegistry {
    classifiers: HashMap<Domain, Arc<dyn Classifier>>,
}

impl ClassifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry serving both domains from loaded bundles
    pub fn from_bundles(bundles: &Bundles) -> Self {
        let mut registry = Self::new();
        for domain in Domain::ALL {
            let bundle: Arc<dyn Classifier> = bundles.get(domain).clone();
            registry.register(domain, bundle);
        }
        registry
    }

    /// Add or replace the classifier for `domain`
    pub fn register(&mut self, domain: Domain, classifier: Arc<dyn Classifier>) {
        self.classifiers.insert(domain, classifier);
    }

    /// Classifier for `domain`.
    ///
    /// Fails only when nothing was registered for the domain, which cannot
    /// happen for a registry built from [`Bundles`].
    pub fn get(&self, domain: Domain) -> Result<Arc<dyn Classifier>> {
        self.classifiers.get(&domain).cloned().ok_or_else(|| {
            Error::load(
                format!("{domain} bundle"),
                "no classifier loaded for this domain",
            )
        })
    }

    /// Get the number of registered classifiers
    pub fn count(&self) -> usize {
        self.classifiers.len()
    }
}

impl std::fmt::Debug for ClassifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self
            .classifiers
            .iter()
            .map(|(domain, c)| (domain.as_str(), c.name().to_string()))
            .collect();
        names.sort();
        f.debug_struct("ClassifierRegistry")
            .field("classifiers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_domain_is_load_error() {
        let registry = ClassifierRegistry::new();
        let err = registry.get(Domain::Social).err().unwrap();
        assert_eq!(err.artifact(), Some("sosmed bundle"));
        assert_eq!(registry.count(), 0);
    }
}
