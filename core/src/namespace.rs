#![deny(missing_docs)]

//! # Reference Namespacing
//!
//! Rewrites a document's local references so they stay unambiguous once
//! multiple documents are merged into one set.

use crate::refs::LOCAL_DEFINITIONS_PREFIX;
use serde_json::{Map, Value};

/// Qualifies every document-local `$ref` in `node` with the owning
/// document's `path`, returning a new tree. The input is never mutated.
///
/// Only `$ref` values that start with `#/definitions/` are rewritten; refs
/// into other document locations (e.g. `#/properties/...`), already
/// qualified refs and non-string `$ref` values pass through unchanged.
/// Known limitation: local refs outside the top-level `definitions` map are
/// never qualified and will not resolve across documents.
pub fn qualify_refs(path: &str, node: &Value) -> Value {
    match node {
        Value::Array(items) => {
            let rewritten = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) => qualify_refs(path, item),
                    scalar => scalar.clone(),
                })
                .collect();
            Value::Array(rewritten)
        }
        Value::Object(fields) => {
            let mut rewritten = Map::with_capacity(fields.len());
            for (key, value) in fields {
                let new_value = match value {
                    Value::String(target)
                        if key == "$ref" && target.starts_with(LOCAL_DEFINITIONS_PREFIX) =>
                    {
                        Value::String(format!("{}{}", path, target))
                    }
                    Value::Array(_) | Value::Object(_) => qualify_refs(path, value),
                    scalar => scalar.clone(),
                };
                rewritten.insert(key.clone(), new_value);
            }
            Value::Object(rewritten)
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_local_definition_ref_is_qualified() {
        let doc = json!({
            "properties": {
                "child": { "$ref": "#/definitions/Child" }
            }
        });

        let namespaced = qualify_refs("a.json", &doc);

        assert_eq!(
            namespaced["properties"]["child"]["$ref"],
            "a.json#/definitions/Child"
        );
        // The input tree is untouched.
        assert_eq!(doc["properties"]["child"]["$ref"], "#/definitions/Child");
    }

    #[test]
    fn test_already_qualified_ref_is_idempotent() {
        let doc = json!({
            "child": { "$ref": "b.json#/definitions/Child" }
        });

        let namespaced = qualify_refs("a.json", &doc);
        assert_eq!(namespaced, doc);

        // A second pass over fresh output changes nothing either.
        let twice = qualify_refs("a.json", &namespaced);
        assert_eq!(twice, namespaced);
    }

    #[test]
    fn test_non_definitions_ref_passes_through() {
        let doc = json!({
            "child": { "$ref": "#/properties/other" },
            "root": { "$ref": "#" }
        });

        let namespaced = qualify_refs("a.json", &doc);
        assert_eq!(namespaced["child"]["$ref"], "#/properties/other");
        assert_eq!(namespaced["root"]["$ref"], "#");
    }

    #[test]
    fn test_non_string_ref_passes_through() {
        let doc = json!({
            "odd": { "$ref": 42 },
            "odder": { "$ref": { "nested": { "$ref": "#/definitions/Deep" } } }
        });

        let namespaced = qualify_refs("a.json", &doc);
        assert_eq!(namespaced["odd"]["$ref"], 42);
        // Mapping-valued $ref is recursed into as an ordinary node.
        assert_eq!(
            namespaced["odder"]["$ref"]["nested"]["$ref"],
            "a.json#/definitions/Deep"
        );
    }

    #[test]
    fn test_refs_inside_sequences_are_qualified() {
        let doc = json!({
            "oneOf": [
                { "$ref": "#/definitions/First" },
                [{ "$ref": "#/definitions/Second" }],
                "scalar",
                7
            ]
        });

        let namespaced = qualify_refs("a.json", &doc);
        assert_eq!(namespaced["oneOf"][0]["$ref"], "a.json#/definitions/First");
        assert_eq!(
            namespaced["oneOf"][1][0]["$ref"],
            "a.json#/definitions/Second"
        );
        assert_eq!(namespaced["oneOf"][2], "scalar");
        assert_eq!(namespaced["oneOf"][3], 7);
    }

    #[test]
    fn test_shape_is_preserved() {
        let doc = json!({
            "title": "Doc",
            "definitions": {
                "A": { "$ref": "#/definitions/B" },
                "B": { "type": "string", "enum": ["x", "y"] }
            },
            "required": ["A"],
            "count": 3,
            "flag": true,
            "nothing": null
        });

        let namespaced = qualify_refs("d.json", &doc);

        let fields = namespaced.as_object().unwrap();
        assert_eq!(fields.len(), doc.as_object().unwrap().len());
        assert_eq!(namespaced["title"], "Doc");
        assert_eq!(namespaced["required"], json!(["A"]));
        assert_eq!(namespaced["count"], 3);
        assert_eq!(namespaced["flag"], true);
        assert_eq!(namespaced["nothing"], Value::Null);
        assert_eq!(
            namespaced["definitions"]["A"]["$ref"],
            "d.json#/definitions/B"
        );
        assert_eq!(namespaced["definitions"]["B"], doc["definitions"]["B"]);
    }

    #[test]
    fn test_scalar_roots_pass_through() {
        assert_eq!(qualify_refs("a.json", &json!("text")), json!("text"));
        assert_eq!(qualify_refs("a.json", &json!(1.5)), json!(1.5));
        assert_eq!(qualify_refs("a.json", &Value::Null), Value::Null);
    }

    #[test]
    fn test_ref_key_only_matches_exactly() {
        let doc = json!({
            "$refs": "#/definitions/NotARef",
            "ref": "#/definitions/AlsoNot"
        });

        let namespaced = qualify_refs("a.json", &doc);
        assert_eq!(namespaced["$refs"], "#/definitions/NotARef");
        assert_eq!(namespaced["ref"], "#/definitions/AlsoNot");
    }
}
