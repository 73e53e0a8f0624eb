//! hoaxcheck Core
//!
//! Core types and utilities shared across hoaxcheck components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The text domains served by the detector (news and social media)
//! - Prediction types: predicted class, class probability distribution

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Domain, PredictedClass, Prediction, ProbabilityDistribution};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Domain, PredictedClass, Prediction, ProbabilityDistribution};
}
