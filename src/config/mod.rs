//! Configuration management


use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// CRD manifest source
    pub crds: CrdsConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Where CRD manifests are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdsConfig {
    /// Directory scanned recursively for `.yaml`/`.yml` manifests
    pub path: PathBuf,

    /// Optional glob filters over `group/version` (empty accepts all)
    #[serde(default)]
    pub filters: Vec<String>,
}

/// Where and how the static site is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory of the generated site
    pub base_path: PathBuf,

    /// Pretty-print the emitted JSON documents
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.crds.path = expand_path(&config.crds.path)?;
        config.output.base_path = expand_path(&config.output.base_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.crds.path.as_os_str().is_empty() {
            return Err(anyhow!("A CRD manifest directory must be configured"));
        }

        if self.output.base_path.as_os_str().is_empty() {
            return Err(anyhow!("An output directory must be configured"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            crds: CrdsConfig {
                path: PathBuf::from("crds"),
                filters: Vec::new(),
            },
            output: OutputConfig {
                base_path: PathBuf::from("public"),
                pretty: true,
            },
        }
    }
}

/// Expand environment variables like `$HOME` in configured paths.
fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if path_str.contains('$') {
        let expanded = shellexpand::env(&path_str)
            .map_err(|e| anyhow!("Failed to expand environment variables: {}", e))?;
        return Ok(PathBuf::from(expanded.as_ref()));
    }

    Ok(path.to_path_buf())
}
