//! Static site generation
//!
//! Writes one `{group}/{version}/{kind}/schema.json` per index leaf, plus a
//! root `index.json` manifest describing the build.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;
use tracing::{info, warn};

use crate::crd::CrdIndex;
use crate::schema::crd_to_json_schema;
use crate::site::routes::static_paths;

/// Outcome of a site build.
#[derive(Debug, Clone)]
pub struct SiteResult {
    pub files_generated: usize,
    pub errors: Vec<String>,
    pub output_path: PathBuf,
}

pub struct SiteGenerator {
    output_path: PathBuf,
    pretty: bool,
}

impl SiteGenerator {
    pub fn new(output_path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_path: output_path.into(),
            pretty,
        }
    }

    /// Write the full static site for an index.
    ///
    /// Leaves whose schema cannot be resolved are skipped and reported in
    /// the result; they are the static analogue of a 404 page and must not
    /// fail the build.
    pub fn generate(&self, index: &CrdIndex) -> Result<SiteResult> {
        info!(
            "Generating schema site for {} targets into {:?}",
            index.len(),
            self.output_path
        );

        fs::create_dir_all(&self.output_path)?;

        let mut generated_urls = Vec::new();
        let mut errors = Vec::new();

        for path in static_paths(index) {
            let crd = match index.get(&path.group, &path.version, &path.kind) {
                Some(crd) => crd,
                None => continue,
            };

            let schema = match crd_to_json_schema(crd, &path.version) {
                Ok(schema) => schema,
                Err(e) => {
                    warn!("Skipping {}: {e}", path.url());
                    errors.push(format!("{}: {e}", path.url()));
                    continue;
                }
            };

            self.write_schema_file(&path.group, &path.version, &path.kind, &schema)?;
            generated_urls.push(path.url());
        }

        self.write_manifest(&generated_urls)?;

        Ok(SiteResult {
            files_generated: generated_urls.len(),
            errors,
            output_path: self.output_path.clone(),
        })
    }

    fn write_schema_file(
        &self,
        group: &str,
        version: &str,
        kind: &str,
        schema: &serde_json::Value,
    ) -> Result<()> {
        let dir = self.output_path.join(group).join(version).join(kind);
        fs::create_dir_all(&dir)?;

        let content = self.render(schema)?;
        fs::write(dir.join("schema.json"), content)?;
        Ok(())
    }

    /// The root manifest: every generated page plus a build timestamp.
    fn write_manifest(&self, urls: &[String]) -> Result<()> {
        let manifest = json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "tool_version": env!("CARGO_PKG_VERSION"),
            "schemas": urls,
        });

        let content = self.render(&manifest)?;
        fs::write(self.output_path.join("index.json"), content)?;
        Ok(())
    }

    fn render(&self, value: &serde_json::Value) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
