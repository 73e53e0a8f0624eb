//! Error types for hoaxcheck

/// Result type alias using hoaxcheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hoaxcheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model or vectorizer artifact could not be loaded. Fatal at startup.
    #[error("failed to load artifact '{artifact}': {reason}")]
    Load {
        /// Artifact file name (or path) that failed
        artifact: String,
        /// Underlying cause
        reason: String,
    },

    /// Classifier parameter errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact load error
    pub fn load(artifact: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Name of the artifact that failed to load, if this is a load error
    pub fn artifact(&self) -> Option<&str> {
        match self {
            Self::Load { artifact, .. } => Some(artifact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_artifact_and_cause() {
        let err = Error::load("model_berita.json", "No such file or directory");
        assert_eq!(err.artifact(), Some("model_berita.json"));
        assert_eq!(
            err.to_string(),
            "failed to load artifact 'model_berita.json': No such file or directory"
        );
    }

    #[test]
    fn test_non_load_errors_have_no_artifact() {
        assert_eq!(Error::config("bad port").artifact(), None);
    }
}
