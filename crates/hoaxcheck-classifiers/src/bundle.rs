//! A fitted (model, vectorizer) pair for one text domain

use crate::classifier::Classifier;
use crate::naive_bayes::MultinomialNb;
use crate::vectorizer::{FeatureVector, TextVectorizer};
use hoaxcheck_core::{Domain, Error, Prediction, Result};

/// Immutable pairing of a fitted model and the vectorizer it was trained with
#[derive(Debug, Clone)]
pub struct ClassifierBundle {
    name: String,
    domain: Domain,
    model: MultinomialNb,
    vectorizer: TextVectorizer,
}

impl ClassifierBundle {
    /// Pair a model with its vectorizer; their feature spaces must agree
    pub fn new(domain: Domain, model: MultinomialNb, vectorizer: TextVectorizer) -> Result<Self> {
        if model.n_features() != vectorizer.n_features() {
            return Err(Error::classifier(format!(
                "model expects {} features but vectorizer produces {}",
                model.n_features(),
                vectorizer.n_features()
            )));
        }

        Ok(Self {
            name: format!("multinomial-nb-{domain}"),
            domain,
            model,
            vectorizer,
        })
    }

    pub fn vectorizer(&self) -> &TextVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &MultinomialNb {
        &self.model
    }

    /// Vocabulary size shared by the model and vectorizer
    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features()
    }

    pub fn vectorize(&self, cleaned: &str) -> FeatureVector {
        self.vectorizer.transform(cleaned)
    }
}

impl Classifier for ClassifierBundle {
    fn predict(&self, cleaned: &str) -> Prediction {
        let features = self.vectorize(cleaned);
        Prediction::from_distribution(self.model.predict_proba(&features))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
