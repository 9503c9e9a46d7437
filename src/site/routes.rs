//! Schema endpoint handling
//!
//! Transport-neutral: the endpoint is a pure function from path parameters
//! to a response value, so it can back a static build or any routing layer.

use tracing::debug;

use crate::crd::CrdIndex;
use crate::schema::crd_to_json_schema;

/// A response value for the schema endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl SiteResponse {
    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body,
        }
    }

    fn bad_request(message: &str) -> Self {
        Self {
            status: 400,
            content_type: "text/plain",
            body: message.to_string(),
        }
    }

    fn not_found(message: &str) -> Self {
        Self {
            status: 404,
            content_type: "text/plain",
            body: message.to_string(),
        }
    }
}

/// Handle `GET /{group}/{version}/{kind}/schema.json`.
///
/// Missing parameters yield a 400 before any index lookup. An unknown triple
/// and every schema-resolution failure collapse to a 404; resolver errors
/// never escape to the caller.
pub fn schema_endpoint(
    index: &CrdIndex,
    group: Option<&str>,
    version: Option<&str>,
    kind: Option<&str>,
) -> SiteResponse {
    let (Some(group), Some(version), Some(kind)) = (group, version, kind) else {
        return SiteResponse::bad_request("Missing parameters");
    };

    let Some(crd) = index.get(group, version, kind) else {
        return SiteResponse::not_found("CRD not found");
    };

    match crd_to_json_schema(crd, version) {
        Ok(schema) => match serde_json::to_string(&schema) {
            Ok(body) => SiteResponse::json(body),
            Err(e) => {
                debug!("Failed to serialize schema for {group}/{version}/{kind}: {e}");
                SiteResponse::not_found("Schema not found")
            }
        },
        Err(e) => {
            debug!("Schema resolution failed for {group}/{version}/{kind}: {e}");
            SiteResponse::not_found("Schema not found")
        }
    }
}

/// One static page target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPath {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl SchemaPath {
    pub fn url(&self) -> String {
        format!("/{}/{}/{}/schema.json", self.group, self.version, self.kind)
    }
}

/// Enumerate every schema page, exactly one per index leaf.
pub fn static_paths(index: &CrdIndex) -> Vec<SchemaPath> {
    index
        .paths()
        .map(|(group, version, kind)| SchemaPath {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::CustomResourceDefinition;

    fn index_with_widget() -> CrdIndex {
        let crd: CustomResourceDefinition = serde_yaml::from_str(
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
    - name: v2
"#,
        )
        .unwrap();
        CrdIndex::from_crds(vec![crd], &[])
    }

    #[test]
    fn test_missing_parameter_is_bad_request() {
        let index = index_with_widget();
        let response = schema_endpoint(&index, Some("example.com"), Some("v1"), None);
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "Missing parameters");
    }

    #[test]
    fn test_unknown_triple_is_not_found() {
        let index = index_with_widget();
        let response = schema_endpoint(&index, Some("example.com"), Some("v1"), Some("Gadget"));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, "CRD not found");
    }

    #[test]
    fn test_schemaless_version_is_not_found() {
        let index = index_with_widget();
        let response = schema_endpoint(&index, Some("example.com"), Some("v2"), Some("Widget"));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, "Schema not found");
    }

    #[test]
    fn test_hit_returns_json_schema() {
        let index = index_with_widget();
        let response = schema_endpoint(&index, Some("example.com"), Some("v1"), Some("Widget"));
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "application/json");

        let schema: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"][0], "a");
    }

    #[test]
    fn test_static_paths_cover_every_leaf() {
        let index = index_with_widget();
        let paths = static_paths(&index);
        assert_eq!(paths.len(), 2);
        assert!(paths
            .iter()
            .any(|p| p.url() == "/example.com/v1/Widget/schema.json"));
        assert!(paths
            .iter()
            .any(|p| p.url() == "/example.com/v2/Widget/schema.json"));
    }
}
