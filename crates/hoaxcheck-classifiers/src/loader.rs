//! Artifact loading with a process-wide cache
//!
//! All four artifacts load or none do: a failure anywhere yields
//! [`Error::Load`] naming the offending file, and no partially built
//! [`Bundles`] value ever escapes.

use crate::artifact::{parse_model, parse_vectorizer};
use crate::bundle::ClassifierBundle;
use crate::config::ArtifactConfig;
use crate::naive_bayes::MultinomialNb;
use crate::vectorizer::TextVectorizer;
use hoaxcheck_core::{Domain, Error, Result};
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// The news and social-media bundles, always complete
#[derive(Debug, Clone)]
pub struct Bundles {
    pub news: Arc<ClassifierBundle>,
    pub social: Arc<ClassifierBundle>,
}

impl Bundles {
    pub fn get(&self, domain: Domain) -> &Arc<ClassifierBundle> {
        match domain {
            Domain::News => &self.news,
            Domain::Social => &self.social,
        }
    }
}

/// Read all four artifacts from storage. Uncached; see [`load_bundles`].
pub fn load_bundles_uncached(config: &ArtifactConfig) -> Result<Bundles> {
    let news = load_domain(config, Domain::News)?;
    let social = load_domain(config, Domain::Social)?;
    Ok(Bundles {
        news: Arc::new(news),
        social: Arc::new(social),
    })
}

fn load_domain(config: &ArtifactConfig, domain: Domain) -> Result<ClassifierBundle> {
    let model_path = config.model_path(domain);
    let vectorizer_path = config.vectorizer_path(domain);

    let model = load_model(&model_path)?;
    let vectorizer = load_vectorizer(&vectorizer_path)?;

    let bundle = ClassifierBundle::new(domain, model, vectorizer).map_err(|e| {
        let err = Error::load(
            vectorizer_path.display().to_string(),
            format!("incompatible with {}: {e}", model_path.display()),
        );
        error!(%domain, "{err}");
        err
    })?;

    info!(
        %domain,
        features = bundle.n_features(),
        tfidf = bundle.vectorizer().is_tfidf(),
        "Loaded classifier bundle"
    );
    Ok(bundle)
}

/// Load one model artifact
pub fn load_model(path: &Path) -> Result<MultinomialNb> {
    let bytes = read_artifact(path)?;
    let model = parse_model(&bytes).map_err(|e| fail(path, e))?;
    info!(path = %path.display(), features = model.n_features(), "Loaded model");
    Ok(model)
}

/// Load one vectorizer artifact
pub fn load_vectorizer(path: &Path) -> Result<TextVectorizer> {
    let bytes = read_artifact(path)?;
    let vectorizer = parse_vectorizer(&bytes).map_err(|e| fail(path, e))?;
    info!(
        path = %path.display(),
        vocabulary = vectorizer.n_features(),
        "Loaded vectorizer"
    );
    Ok(vectorizer)
}

fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => fail(path, "file not found"),
        _ => fail(path, e),
    })
}

fn fail(path: &Path, reason: impl std::fmt::Display) -> Error {
    let err = Error::load(path.display().to_string(), reason);
    error!("{err}");
    err
}

/// Holds the bundles once they have been loaded successfully
#[derive(Default)]
pub struct BundleCache {
    slot: Mutex<Option<Arc<Bundles>>>,
}

impl BundleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached bundles, loading them on first use.
    ///
    /// Failed loads are not cached. Concurrent first callers wait for a
    /// single load instead of reading storage twice.
    pub fn get_or_load(&self, config: &ArtifactConfig) -> Result<Arc<Bundles>> {
        let mut slot = self.slot.lock();
        if let Some(bundles) = slot.as_ref() {
            return Ok(Arc::clone(bundles));
        }

        let bundles = Arc::new(load_bundles_uncached(config)?);
        *slot = Some(Arc::clone(&bundles));
        Ok(bundles)
    }

    /// Cached bundles, if loaded
    pub fn get(&self) -> Option<Arc<Bundles>> {
        self.slot.lock().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.lock().is_some()
    }
}

lazy_static! {
    static ref PROCESS_BUNDLES: BundleCache = BundleCache::new();
}

/// Load the bundles once per process.
///
/// The first successful call reads storage; every later call returns the
/// same bundles without touching the filesystem, whatever `config` says.
pub fn load_bundles(config: &ArtifactConfig) -> Result<Arc<Bundles>> {
    PROCESS_BUNDLES.get_or_load(config)
}
