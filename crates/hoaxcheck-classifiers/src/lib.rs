//! hoaxcheck Classifiers
//!
//! Inference side of the Indonesian hoax detector:
//! - text normalization matching the training-time preprocessing
//! - fitted bag-of-words / TF-IDF vectorizers
//! - Multinomial Naive Bayes scoring
//! - artifact loading, cached once per process
//!
//! Each text domain (news, social media) is served by its own
//! [`ClassifierBundle`]. Bundles are immutable and cheap to share.

pub mod artifact;
pub mod bundle;
pub mod classifier;
pub mod config;
pub mod loader;
pub mod naive_bayes;
pub mod normalize;
pub mod registry;
pub mod vectorizer;

pub use bundle::ClassifierBundle;
pub use classifier::{ClassificationResult, Classifier};
pub use config::{ArtifactConfig, DomainArtifacts};
pub use loader::{load_bundles, load_bundles_uncached, BundleCache, Bundles};
pub use naive_bayes::MultinomialNb;
pub use normalize::{normalize, normalize_with_trace, NormalizationStep, NormalizationTrace};
pub use registry::ClassifierRegistry;
pub use vectorizer::{FeatureVector, Norm, TextVectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::loader::{load_bundles, Bundles};
    pub use crate::normalize::normalize;
    pub use crate::registry::ClassifierRegistry;
    pub use hoaxcheck_core::{Domain, PredictedClass, Prediction, ProbabilityDistribution};
}
