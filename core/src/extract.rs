#![deny(missing_docs)]

//! # Definition Extraction
//!
//! Lifts the entries of a document's top-level `definitions` map into
//! object definition records for the emission driver.

use serde::Serialize;
use serde_json::Value;

/// Fallback namespace for documents that declare no `title`.
pub const DEFAULT_NAMESPACE: &str = "undefined";

/// One named type definition lifted out of a document's `definitions` map.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDefinition {
    /// Namespace derived from the owning document's `title`.
    pub namespace: String,
    /// Definition key within the `definitions` map.
    pub name: String,
    /// The definition's schema subtree.
    pub schema: Value,
}

impl ObjectDefinition {
    /// Fully-qualified name, the generator's identity key.
    pub fn fqn(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

/// Collects one [`ObjectDefinition`] per entry in the document's top-level
/// `definitions` map, in declaration order.
///
/// A document without a `definitions` mapping yields no records. Records are
/// never deduplicated here; identity handling is the generator's concern.
pub fn find_api_object_definitions(document: &Value) -> Vec<ObjectDefinition> {
    let namespace = document
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_NAMESPACE);

    let Some(definitions) = document.get("definitions").and_then(Value::as_object) else {
        return Vec::new();
    };

    definitions
        .iter()
        .map(|(name, schema)| ObjectDefinition {
            namespace: namespace.to_string(),
            name: name.clone(),
            schema: schema.clone(),
        })
        .collect()
}
