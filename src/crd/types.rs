//! Typed CRD records

use serde::{Deserialize, Serialize};

/// A parsed CustomResourceDefinition manifest.
///
/// Only the fields the index and resolver need are modeled; everything else
/// in the manifest is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomResourceDefinition {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: CrdSpec,
}

/// Manifest metadata (informational only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: Option<String>,
}

/// The CRD spec: API group, naming, and declared versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdSpec {
    pub group: String,
    pub names: CrdNames,
    #[serde(default)]
    pub versions: Vec<CrdVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdNames {
    pub kind: String,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub singular: Option<String>,
}

/// A single declared version of a CRD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdVersion {
    pub name: String,
    #[serde(default)]
    pub served: bool,
    #[serde(default)]
    pub storage: bool,
    #[serde(default)]
    pub schema: Option<VersionSchema>,
}

/// The validation schema container of a version entry.
///
/// The OpenAPI fragment is held as an owned JSON value; it is never shared
/// with or mutated by later stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSchema {
    #[serde(rename = "openAPIV3Schema", default)]
    pub open_api_v3_schema: Option<serde_json::Value>,
}

impl CustomResourceDefinition {
    /// The API group this CRD belongs to.
    pub fn group(&self) -> &str {
        &self.spec.group
    }

    /// The resource kind declared under `spec.names.kind`.
    pub fn kind(&self) -> &str {
        &self.spec.names.kind
    }

    /// Find a declared version entry by name (first match wins).
    pub fn version(&self, name: &str) -> Option<&CrdVersion> {
        self.spec.versions.iter().find(|v| v.name == name)
    }
}
