//! On-disk artifact format
//!
//! Every artifact is a JSON document with a small header:
//!
//! ```json
//! { "format_version": 1, "kind": "multinomial_nb", ... }
//! ```
//!
//! `kind` is `multinomial_nb` for models and `count` or `tfidf` for
//! vectorizers. The remaining fields are the fitted parameters exported by
//! the training pipeline.

use crate::naive_bayes::MultinomialNb;
use crate::vectorizer::{Norm, TextVectorizer, DEFAULT_TOKEN_PATTERN};
use hoaxcheck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Artifact format version this build understands
pub const FORMAT_VERSION: u32 = 1;

/// Fields shared by every artifact
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactHeader {
    pub format_version: u32,
    pub kind: ArtifactKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    MultinomialNb,
    Count,
    Tfidf,
}

impl ArtifactKind {
    pub fn is_vectorizer(&self) -> bool {
        matches!(self, Self::Count | Self::Tfidf)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::MultinomialNb => "multinomial_nb",
            Self::Count => "count",
            Self::Tfidf => "tfidf",
        })
    }
}

/// Exported Multinomial Naive Bayes parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub classes: Vec<i64>,
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,

    /// Smoothing used at training time (informational)
    #[serde(default)]
    pub alpha: Option<f64>,
}

/// Exported vectorizer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,

    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    #[serde(default)]
    pub stop_words: Vec<String>,

    #[serde(default)]
    pub binary: bool,

    /// TF-IDF only
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// TF-IDF only
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,

    /// TF-IDF only
    #[serde(default)]
    pub sublinear_tf: bool,
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Read and check the header, returning the parsed document for the body
fn parse_header(bytes: &[u8]) -> Result<(ArtifactHeader, serde_json::Value)> {
    let document: serde_json::Value = serde_json::from_slice(bytes)?;
    let header: ArtifactHeader = serde_json::from_value(document.clone())?;
    if header.format_version != FORMAT_VERSION {
        return Err(Error::classifier(format!(
            "unsupported format version {} (this build reads version {FORMAT_VERSION})",
            header.format_version
        )));
    }
    Ok((header, document))
}

/// Parse a model artifact
pub fn parse_model(bytes: &[u8]) -> Result<MultinomialNb> {
    let (header, document) = parse_header(bytes)?;
    if header.kind != ArtifactKind::MultinomialNb {
        return Err(Error::classifier(format!(
            "expected a multinomial_nb model artifact, found kind '{}'",
            header.kind
        )));
    }
    let artifact: ModelArtifact = serde_json::from_value(document)?;
    MultinomialNb::new(
        &artifact.classes,
        artifact.class_log_prior,
        artifact.feature_log_prob,
    )
}

/// Parse a vectorizer artifact
pub fn parse_vectorizer(bytes: &[u8]) -> Result<TextVectorizer> {
    let (header, document) = parse_header(bytes)?;
    if !header.kind.is_vectorizer() {
        return Err(Error::classifier(format!(
            "expected a count or tfidf vectorizer artifact, found kind '{}'",
            header.kind
        )));
    }
    let artifact: VectorizerArtifact = serde_json::from_value(document)?;
    let (min_n, max_n) = artifact.ngram_range;

    let vectorizer = TextVectorizer::count(artifact.vocabulary)?
        .with_token_pattern(&artifact.token_pattern)?
        .with_lowercase(artifact.lowercase)
        .with_ngram_range(min_n, max_n)?
        .with_stop_words(artifact.stop_words)
        .with_binary(artifact.binary);

    if header.kind == ArtifactKind::Count {
        return Ok(vectorizer);
    }
    Ok(vectorizer
        .with_idf(artifact.idf)?
        .with_norm(artifact.norm)
        .with_sublinear_tf(artifact.sublinear_tf))
}
