//! Schema resolution
//!
//! Locates the embedded OpenAPI v3 schema of a CRD version and converts it
//! into a standalone JSON Schema document.

pub mod convert;

use serde_json::Value;

use crate::crd::CustomResourceDefinition;
use crate::Error;

/// Resolve the JSON Schema for one declared version of a CRD.
///
/// Searches `spec.versions` for the first entry named `version` and converts
/// its `schema.openAPIV3Schema` fragment. Fails with
/// [`Error::SchemaNotFound`] when the version is not declared or carries no
/// schema. The source fragment is left untouched; the returned document is
/// independently owned.
pub fn crd_to_json_schema(
    crd: &CustomResourceDefinition,
    version: &str,
) -> Result<Value, Error> {
    let openapi_schema = crd
        .version(version)
        .and_then(|v| v.schema.as_ref())
        .and_then(|s| s.open_api_v3_schema.as_ref())
        .ok_or_else(|| Error::SchemaNotFound {
            version: version.to_string(),
        })?;

    Ok(convert::openapi_to_json_schema(openapi_schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget_crd() -> CustomResourceDefinition {
        serde_yaml::from_str(
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
          properties:
            a:
              type: string
          required: [a]
    - name: v1alpha1
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_declared_version() {
        let crd = widget_crd();
        let schema = crd_to_json_schema(&crd, "v1").unwrap();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["a"]["type"], "string");
        assert_eq!(schema["required"], json!(["a"]));
        assert!(schema["$schema"].is_string());
    }

    #[test]
    fn test_missing_version_names_the_request() {
        let crd = widget_crd();
        let err = crd_to_json_schema(&crd, "v2").unwrap_err();
        match err {
            Error::SchemaNotFound { version } => assert_eq!(version, "v2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_version_without_schema_fails() {
        let crd = widget_crd();
        let err = crd_to_json_schema(&crd, "v1alpha1").unwrap_err();
        assert!(matches!(err, Error::SchemaNotFound { .. }));
    }

    #[test]
    fn test_source_fragment_is_not_mutated() {
        let crd = widget_crd();
        let before = crd.spec.versions[0]
            .schema
            .as_ref()
            .and_then(|s| s.open_api_v3_schema.clone())
            .unwrap();

        let _ = crd_to_json_schema(&crd, "v1").unwrap();

        let after = crd.spec.versions[0]
            .schema
            .as_ref()
            .and_then(|s| s.open_api_v3_schema.clone())
            .unwrap();
        assert_eq!(before, after);
        assert!(before.get("$schema").is_none());
    }
}
