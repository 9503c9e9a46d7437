//! OpenAPI v3 Schema Object to JSON Schema translation
//!
//! Pure and deterministic. The translation covers the OpenAPI-only keyword
//! forms that appear in CRD schemas: `nullable`, and the boolean
//! `exclusiveMinimum`/`exclusiveMaximum` style. Keywords shared between the
//! two dialects (including `x-kubernetes-*` vendor extensions) pass through
//! untouched.

use serde_json::{Map, Value};

/// The draft identifier stamped on converted documents.
pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Subschema positions that hold a single schema.
const SINGLE_SUBSCHEMAS: &[&str] = &["items", "additionalProperties", "not"];

/// Subschema positions that hold a map of schemas.
const MAP_SUBSCHEMAS: &[&str] = &["properties", "patternProperties", "definitions"];

/// Subschema positions that hold an array of schemas.
const ARRAY_SUBSCHEMAS: &[&str] = &["allOf", "anyOf", "oneOf"];

/// Convert an OpenAPI v3 Schema Object into a JSON Schema document.
///
/// The input is never modified; the result is a fresh document with a
/// `$schema` marker on the root.
pub fn openapi_to_json_schema(schema: &Value) -> Value {
    let mut converted = schema.clone();
    convert_node(&mut converted);

    if let Value::Object(map) = &mut converted {
        map.insert(
            "$schema".to_string(),
            Value::String(JSON_SCHEMA_DRAFT.to_string()),
        );
    }

    converted
}

fn convert_node(value: &mut Value) {
    let Value::Object(map) = value else {
        return;
    };

    convert_nullable(map);
    convert_exclusive_bound(map, "exclusiveMinimum", "minimum");
    convert_exclusive_bound(map, "exclusiveMaximum", "maximum");

    for key in SINGLE_SUBSCHEMAS {
        if let Some(sub) = map.get_mut(*key) {
            convert_node(sub);
        }
    }

    for key in MAP_SUBSCHEMAS {
        if let Some(Value::Object(subs)) = map.get_mut(*key) {
            for sub in subs.values_mut() {
                convert_node(sub);
            }
        }
    }

    for key in ARRAY_SUBSCHEMAS {
        if let Some(Value::Array(subs)) = map.get_mut(*key) {
            for sub in subs {
                convert_node(sub);
            }
        }
    }
}

/// `nullable: true` widens `type` to admit `"null"`; the keyword itself is
/// dropped either way.
fn convert_nullable(map: &mut Map<String, Value>) {
    let nullable = matches!(map.remove("nullable"), Some(Value::Bool(true)));
    if !nullable {
        return;
    }

    let widened = match map.get("type") {
        Some(Value::String(t)) => Some(Value::Array(vec![
            Value::String(t.clone()),
            Value::String("null".to_string()),
        ])),
        Some(Value::Array(types)) if !types.iter().any(|t| t == "null") => {
            let mut types = types.clone();
            types.push(Value::String("null".to_string()));
            Some(Value::Array(types))
        }
        _ => None,
    };

    if let Some(widened) = widened {
        map.insert("type".to_string(), widened);
    }
}

/// OpenAPI expresses exclusive bounds as a boolean modifier on
/// `minimum`/`maximum`; draft-07 uses a standalone numeric keyword.
fn convert_exclusive_bound(map: &mut Map<String, Value>, exclusive_key: &str, bound_key: &str) {
    match map.get(exclusive_key) {
        Some(Value::Bool(true)) => {
            if let Some(bound) = map.remove(bound_key) {
                map.insert(exclusive_key.to_string(), bound);
            } else {
                map.remove(exclusive_key);
            }
        }
        Some(Value::Bool(false)) => {
            map.remove(exclusive_key);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stamps_schema_draft() {
        let schema = json!({"type": "object"});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["$schema"], JSON_SCHEMA_DRAFT);
        assert_eq!(converted["type"], "object");
    }

    #[test]
    fn test_shape_is_preserved() {
        let schema = json!({
            "type": "object",
            "properties": {"a": {"type": "string"}},
            "required": ["a"]
        });
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["type"], "object");
        assert_eq!(converted["properties"]["a"]["type"], "string");
        assert_eq!(converted["required"], json!(["a"]));
    }

    #[test]
    fn test_nullable_widens_type() {
        let schema = json!({"type": "string", "nullable": true});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["type"], json!(["string", "null"]));
        assert!(converted.get("nullable").is_none());
    }

    #[test]
    fn test_nullable_false_is_dropped() {
        let schema = json!({"type": "string", "nullable": false});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["type"], "string");
        assert!(converted.get("nullable").is_none());
    }

    #[test]
    fn test_nullable_in_nested_property() {
        let schema = json!({
            "type": "object",
            "properties": {
                "count": {"type": "integer", "nullable": true}
            }
        });
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(
            converted["properties"]["count"]["type"],
            json!(["integer", "null"])
        );
    }

    #[test]
    fn test_boolean_exclusive_minimum_becomes_numeric() {
        let schema = json!({"type": "integer", "minimum": 1, "exclusiveMinimum": true});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["exclusiveMinimum"], 1);
        assert!(converted.get("minimum").is_none());
    }

    #[test]
    fn test_boolean_exclusive_maximum_false_is_dropped() {
        let schema = json!({"type": "integer", "maximum": 10, "exclusiveMaximum": false});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["maximum"], 10);
        assert!(converted.get("exclusiveMaximum").is_none());
    }

    #[test]
    fn test_numeric_exclusive_bounds_pass_through() {
        let schema = json!({"type": "number", "exclusiveMinimum": 0.5});
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["exclusiveMinimum"], 0.5);
    }

    #[test]
    fn test_recurses_into_items_and_combinators() {
        let schema = json!({
            "type": "array",
            "items": {
                "anyOf": [
                    {"type": "string", "nullable": true},
                    {"type": "integer", "minimum": 0, "exclusiveMinimum": true}
                ]
            }
        });
        let converted = openapi_to_json_schema(&schema);
        let any_of = &converted["items"]["anyOf"];
        assert_eq!(any_of[0]["type"], json!(["string", "null"]));
        assert_eq!(any_of[1]["exclusiveMinimum"], 0);
    }

    #[test]
    fn test_vendor_extensions_pass_through() {
        let schema = json!({
            "type": "object",
            "x-kubernetes-preserve-unknown-fields": true,
            "description": "a widget"
        });
        let converted = openapi_to_json_schema(&schema);
        assert_eq!(converted["x-kubernetes-preserve-unknown-fields"], true);
        assert_eq!(converted["description"], "a widget");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let schema = json!({"type": "string", "nullable": true});
        let before = schema.clone();
        let _ = openapi_to_json_schema(&schema);
        assert_eq!(schema, before);
    }
}
