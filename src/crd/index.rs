//! CRD index construction
//!
//! Scans a manifest directory once at startup and folds every
//! CustomResourceDefinition found into a three-level lookup keyed by
//! group, version, and kind. The index is read-only after construction.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use glob::Pattern;
use serde::Deserialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::crd::types::CustomResourceDefinition;
use crate::Error;

pub type KindMap = BTreeMap<String, CustomResourceDefinition>;
pub type VersionMap = BTreeMap<String, KindMap>;

/// The three-level CRD lookup: group -> version -> kind -> CRD.
///
/// At most one CRD is held per (group, version, kind) triple; on collision
/// the first-inserted entry wins. Iteration order is the maps' key order,
/// not filesystem enumeration order.
#[derive(Debug, Clone, Default)]
pub struct CrdIndex {
    groups: BTreeMap<String, VersionMap>,
}

impl CrdIndex {
    /// Build an index from every CRD manifest under `dir`.
    ///
    /// Files without a `.yaml`/`.yml` extension are ignored. Malformed YAML
    /// and structurally invalid CRD documents abort the build; one corrupt
    /// manifest must not produce a partial, misleading index.
    pub fn build(dir: &Path) -> Result<Self, Error> {
        Self::build_with_filters(dir, &[])
    }

    /// Build an index, keeping only CRD versions whose `group/version`
    /// matches at least one glob filter. An empty filter list accepts all.
    pub fn build_with_filters(dir: &Path, filters: &[String]) -> Result<Self, Error> {
        info!("Building CRD index from {:?}", dir);

        let meta = fs::metadata(dir)?;
        if !meta.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a directory: {}", dir.display()),
            )));
        }

        let mut crds = Vec::new();

        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();

            match path.extension().and_then(|e| e.to_str()) {
                Some("yaml") | Some("yml") => {}
                _ => continue,
            }

            crds.extend(parse_manifest_file(path)?);
        }

        let index = Self::from_crds(crds, filters);
        info!("Indexed {} CRD schema targets", index.len());
        Ok(index)
    }

    /// Fold parsed CRDs into an index, suppressing duplicate triples.
    ///
    /// Duplicate suppression is local to this call; the builder keeps no
    /// global state and can be re-run freely.
    pub fn from_crds(crds: Vec<CustomResourceDefinition>, filters: &[String]) -> Self {
        let mut groups: BTreeMap<String, VersionMap> = BTreeMap::new();
        let mut seen: HashSet<String> = HashSet::new();

        for crd in crds {
            let group = crd.group().to_string();
            let kind = crd.kind().to_string();

            for version in &crd.spec.versions {
                let api_version = format!("{}/{}", group, version.name);
                if !matches_filters(&api_version, filters) {
                    debug!("Skipping {} ({}): filtered out", kind, api_version);
                    continue;
                }

                let key = format!("{}/{}/{}", group, version.name, kind);
                if seen.contains(&key) {
                    warn!("Duplicate CRD found: {key}");
                    continue;
                }
                seen.insert(key);

                groups
                    .entry(group.clone())
                    .or_default()
                    .entry(version.name.clone())
                    .or_default()
                    .insert(kind.clone(), crd.clone());
            }
        }

        Self { groups }
    }

    /// Look up the CRD registered for a (group, version, kind) triple.
    pub fn get(
        &self,
        group: &str,
        version: &str,
        kind: &str,
    ) -> Option<&CustomResourceDefinition> {
        self.groups.get(group)?.get(version)?.get(kind)
    }

    /// The group-keyed map backing the index.
    pub fn groups(&self) -> &BTreeMap<String, VersionMap> {
        &self.groups
    }

    /// Every (group, version, kind) triple present, one per index leaf.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.groups.iter().flat_map(|(group, versions)| {
            versions.iter().flat_map(move |(version, kinds)| {
                kinds
                    .keys()
                    .map(move |kind| (group.as_str(), version.as_str(), kind.as_str()))
            })
        })
    }

    /// Number of index leaves.
    pub fn len(&self) -> usize {
        self.paths().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Parse one manifest file into its CRD documents.
///
/// A single file may hold multiple `---`-separated documents; non-CRD
/// documents are discarded silently.
fn parse_manifest_file(path: &Path) -> Result<Vec<CustomResourceDefinition>, Error> {
    let content = fs::read_to_string(path)?;

    let mut crds = Vec::new();

    for doc in serde_yaml::Deserializer::from_str(&content) {
        let value = serde_yaml::Value::deserialize(doc).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value.get("kind").and_then(|k| k.as_str()) {
            Some("CustomResourceDefinition") => {}
            _ => continue,
        }

        let crd: CustomResourceDefinition =
            serde_yaml::from_value(value).map_err(|e| Error::InvalidManifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        crds.push(crd);
    }

    Ok(crds)
}

/// Check an `group/version` string against the configured glob filters.
fn matches_filters(api_version: &str, filters: &[String]) -> bool {
    if filters.is_empty() {
        return true;
    }

    filters.iter().any(|filter| match Pattern::new(filter) {
        Ok(pattern) => pattern.matches(api_version),
        Err(_) => false,
    })
}
