//! Schemasite
//!
//! Builds an in-memory index of Kubernetes CustomResourceDefinitions from a
//! directory of YAML manifests and publishes each version's validation
//! schema as a static `{group}/{version}/{kind}/schema.json` document,
//! converted from OpenAPI v3 to JSON Schema.

pub mod builtins;
pub mod cli;
pub mod config;
pub mod crd;
pub mod schema;
pub mod site;

pub use config::Config;
pub use crd::{CrdIndex, CustomResourceDefinition};
pub use schema::crd_to_json_schema;
pub use site::{SchemaPath, SiteGenerator, SiteResponse, SiteResult};

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid CRD manifest in {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("No OpenAPI schema found for version {version}")]
    SchemaNotFound { version: String },
}

/// Main application: configuration plus the index built from it.
///
/// The index is constructed once here, before any lookup or generation can
/// happen, and is never mutated afterwards.
pub struct SchemaSite {
    config: Config,
    index: CrdIndex,
}

impl SchemaSite {
    /// Build the CRD index for a configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let index = CrdIndex::build_with_filters(&config.crds.path, &config.crds.filters)?;
        info!(
            "Index ready: {} schema targets across {} groups",
            index.len(),
            index.groups().len()
        );

        Ok(Self { config, index })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &CrdIndex {
        &self.index
    }

    /// Every schema page the site will contain.
    pub fn paths(&self) -> Vec<SchemaPath> {
        site::static_paths(&self.index)
    }

    /// Answer one schema request (the endpoint behind
    /// `GET /{group}/{version}/{kind}/schema.json`).
    pub fn schema_response(
        &self,
        group: Option<&str>,
        version: Option<&str>,
        kind: Option<&str>,
    ) -> SiteResponse {
        site::schema_endpoint(&self.index, group, version, kind)
    }

    /// Write the static site to the configured output directory.
    pub fn generate(&self) -> Result<SiteResult> {
        let generator = SiteGenerator::new(&self.config.output.base_path, self.config.output.pretty);
        generator.generate(&self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_build_then_serve() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("widget.yaml"),
            r#"
kind: CustomResourceDefinition
spec:
  group: example.com
  names:
    kind: Widget
  versions:
    - name: v1
      schema:
        openAPIV3Schema:
          type: object
"#,
        )
        .unwrap();

        let config = Config {
            crds: config::CrdsConfig {
                path: dir.path().to_path_buf(),
                filters: Vec::new(),
            },
            output: config::OutputConfig {
                base_path: dir.path().join("public"),
                pretty: false,
            },
            ..Config::default()
        };

        let site = SchemaSite::new(config).unwrap();
        assert_eq!(site.paths().len(), 1);

        let hit = site.schema_response(Some("example.com"), Some("v1"), Some("Widget"));
        assert_eq!(hit.status, 200);

        let miss = site.schema_response(Some("example.com"), Some("v1"), Some("Gadget"));
        assert_eq!(miss.status, 404);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.crds.path = PathBuf::new();
        assert!(SchemaSite::new(config).is_err());
    }
}
