//! Server configuration

use hoaxcheck_classifiers::ArtifactConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration file (`hoaxcheck.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoaxcheckConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Model and vectorizer artifact locations
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_address")]
    pub address: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default)]
    pub allow_any_origin: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            allow_any_origin: false,
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub artifacts_dir: Option<PathBuf>,
}

impl HoaxcheckConfig {
    /// Load configuration from file (if present) and CLI overrides
    pub fn load(config_path: impl AsRef<Path>, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                anyhow::anyhow!("invalid configuration in {}: {}", config_path.display(), e)
            })?
        } else {
            Self::default()
        };

        if let Some(address) = &overrides.address {
            config.server.address = address.clone();
        }
        if let Some(port) = overrides.port {
            config.server.port = port;
        }
        if let Some(dir) = &overrides.artifacts_dir {
            config.artifacts.dir = dir.clone();
        }

        Ok(config)
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}
