#![deny(missing_docs)]

//! # Document Set
//!
//! Path-addressed store for bundled schema documents. Paths are normalized
//! document URLs; iteration follows registration order so repeated runs over
//! the same input produce identical output.

use indexmap::IndexMap;
use serde_json::Value;

/// A bundled set of schema documents addressed by path.
#[derive(Debug, Default)]
pub struct DocumentSet {
    docs: IndexMap<String, Value>,
}

impl DocumentSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document under `path`.
    ///
    /// The first registration wins: returns `false` and leaves the existing
    /// entry untouched when the path is already present.
    pub fn insert(&mut self, path: &str, document: Value) -> bool {
        if self.docs.contains_key(path) {
            return false;
        }
        self.docs.insert(path.to_string(), document);
        true
    }

    /// Returns whether `path` is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.docs.contains_key(path)
    }

    /// Returns the document registered under `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.docs.get(path)
    }

    /// Replaces the document under `path` in one step.
    ///
    /// Unlike [`insert`](Self::insert), an existing entry is overwritten;
    /// its position in the registration order is preserved.
    pub fn set(&mut self, path: &str, document: Value) {
        self.docs.insert(path.to_string(), document);
    }

    /// All registered paths, in registration order.
    pub fn paths(&self) -> Vec<String> {
        self.docs.keys().cloned().collect()
    }

    /// All registered documents, in registration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.docs.values()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns whether the set holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_registration_wins() {
        let mut set = DocumentSet::new();
        assert!(set.insert("a.json", json!({"title": "First"})));
        assert!(!set.insert("a.json", json!({"title": "Second"})));

        let doc = set.get("a.json").unwrap();
        assert_eq!(doc["title"], "First");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut set = DocumentSet::new();
        set.insert("a.json", json!({"v": 1}));
        set.insert("b.json", json!({"v": 2}));

        set.set("a.json", json!({"v": 3}));

        assert_eq!(set.get("a.json").unwrap()["v"], 3);
        // Replacement keeps the original position.
        assert_eq!(set.paths(), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut set = DocumentSet::new();
        set.insert("c.json", json!({"n": 1}));
        set.insert("a.json", json!({"n": 2}));
        set.insert("b.json", json!({"n": 3}));

        assert_eq!(set.paths(), vec!["c.json", "a.json", "b.json"]);
        let numbers: Vec<i64> = set.values().map(|v| v["n"].as_i64().unwrap()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_set() {
        let set = DocumentSet::new();
        assert!(set.is_empty());
        assert!(set.get("missing.json").is_none());
        assert!(set.paths().is_empty());
    }
}
