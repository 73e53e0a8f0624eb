//! Multinomial Naive Bayes (inference only)
//!
//! Scores a feature row with the fitted log priors and per-class feature log
//! probabilities:
//!
//! `jll[c] = class_log_prior[c] + Σ_j x_j · feature_log_prob[c][j]`
//!
//! and turns the joint log-likelihoods into probabilities with log-sum-exp.

use crate::vectorizer::FeatureVector;
use hoaxcheck_core::{Error, PredictedClass, ProbabilityDistribution, Result};

/// Fitted two-class Multinomial Naive Bayes model.
///
/// Rows are stored in [`PredictedClass`] order regardless of the class order
/// the model was exported with: row 0 is always REAL, row 1 always HOAX.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Build a model from exported parameters.
    ///
    /// `classes[k]` is the encoded label (0 or 1) of row `k` in
    /// `class_log_prior` and `feature_log_prob`.
    pub fn new(
        classes: &[i64],
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if classes.len() != 2 {
            return Err(Error::classifier(format!(
                "expected a binary model with 2 classes, found {}",
                classes.len()
            )));
        }
        if class_log_prior.len() != 2 || feature_log_prob.len() != 2 {
            return Err(Error::classifier(format!(
                "class_log_prior has {} rows and feature_log_prob has {} rows, expected 2",
                class_log_prior.len(),
                feature_log_prob.len()
            )));
        }

        let mut order = [usize::MAX; 2];
        for (row, &label) in classes.iter().enumerate() {
            let class = PredictedClass::from_label(label).ok_or_else(|| {
                Error::classifier(format!("unknown class label {label}, expected 0 or 1"))
            })?;
            if order[class.index()] != usize::MAX {
                return Err(Error::classifier(format!("class label {label} appears twice")));
            }
            order[class.index()] = row;
        }

        let n_features = feature_log_prob[0].len();
        if feature_log_prob[1].len() != n_features {
            return Err(Error::classifier(format!(
                "feature_log_prob rows differ in length ({} vs {})",
                n_features,
                feature_log_prob[1].len()
            )));
        }
        let all_finite = class_log_prior
            .iter()
            .chain(feature_log_prob.iter().flatten())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::classifier("model parameters contain non-finite values"));
        }

        let mut rows = feature_log_prob.into_iter();
        let (first, second) = match (rows.next(), rows.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(Error::internal("feature_log_prob lost a row")),
        };
        let (real, hoax) = if order[0] == 0 {
            (first, second)
        } else {
            (second, first)
        };

        Ok(Self {
            class_log_prior: [class_log_prior[order[0]], class_log_prior[order[1]]],
            feature_log_prob: [real, hoax],
        })
    }

    /// Number of features the model was fitted on
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    /// Log prior of `class`
    pub fn class_log_prior(&self, class: PredictedClass) -> f64 {
        self.class_log_prior[class.index()]
    }

    /// Unnormalized per-class log-likelihood of a feature row, indexed by class
    pub fn joint_log_likelihood(&self, features: &FeatureVector) -> [f64; 2] {
        [
            self.class_log_prior[0] + features.dot(&self.feature_log_prob[0]),
            self.class_log_prior[1] + features.dot(&self.feature_log_prob[1]),
        ]
    }

    /// Posterior class probabilities
    pub fn predict_proba(&self, features: &FeatureVector) -> ProbabilityDistribution {
        ProbabilityDistribution::from_log_likelihoods(self.joint_log_likelihood(features))
    }

    /// Class of maximum posterior probability (ties go to REAL)
    pub fn predict(&self, features: &FeatureVector) -> PredictedClass {
        self.predict_proba(features).argmax()
    }
}
