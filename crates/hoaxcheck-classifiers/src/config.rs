//! Configuration for artifact loading

use hoaxcheck_core::{Domain, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the four model and vectorizer artifacts live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Directory that relative artifact paths are resolved against
    #[serde(default = "default_artifacts_dir")]
    pub dir: PathBuf,

    /// News-domain artifacts
    #[serde(default = "default_berita")]
    pub berita: DomainArtifacts,

    /// Social-media-domain artifacts
    #[serde(default = "default_sosmed")]
    pub sosmed: DomainArtifacts,
}

/// Model and vectorizer file for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainArtifacts {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl DomainArtifacts {
    /// Conventional file names: `model_<domain>.json` and `vectorizer_<domain>.json`
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            model: PathBuf::from(format!("model_{domain}.json")),
            vectorizer: PathBuf::from(format!("vectorizer_{domain}.json")),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
            berita: default_berita(),
            sosmed: default_sosmed(),
        }
    }
}

impl ArtifactConfig {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid artifact configuration: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::config(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn domain(&self, domain: Domain) -> &DomainArtifacts {
        match domain {
            Domain::News => &self.berita,
            Domain::Social => &self.sosmed,
        }
    }

    /// Resolved path of a domain's model artifact
    pub fn model_path(&self, domain: Domain) -> PathBuf {
        self.dir.join(&self.domain(domain).model)
    }

    /// Resolved path of a domain's vectorizer artifact
    pub fn vectorizer_path(&self, domain: Domain) -> PathBuf {
        self.dir.join(&self.domain(domain).vectorizer)
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_berita() -> DomainArtifacts {
    DomainArtifacts::for_domain(Domain::News)
}

fn default_sosmed() -> DomainArtifacts {
    DomainArtifacts::for_domain(Domain::Social)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let config = ArtifactConfig::default();
        assert_eq!(config.model_path(Domain::News), Path::new("./model_berita.json"));
        assert_eq!(
            config.vectorizer_path(Domain::Social),
            Path::new("./vectorizer_sosmed.json")
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
dir: /srv/models
sosmed:
  model: sosmed/nb.json
  vectorizer: /opt/shared/tfidf.json
"#;
        let config = ArtifactConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.model_path(Domain::News),
            Path::new("/srv/models/model_berita.json")
        );
        assert_eq!(
            config.model_path(Domain::Social),
            Path::new("/srv/models/sosmed/nb.json")
        );
        // absolute paths are not re-rooted
        assert_eq!(
            config.vectorizer_path(Domain::Social),
            Path::new("/opt/shared/tfidf.json")
        );
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = ArtifactConfig::from_yaml("dir: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
