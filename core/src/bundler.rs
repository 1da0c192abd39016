#![deny(missing_docs)]

//! # Document Bundler
//!
//! Closes a root schema document over every document it transitively
//! references, producing a [`DocumentSet`] addressed by normalized URL.
//! Fragment-only references (`#...`) are document-local and never trigger
//! a fetch.

use crate::document::DocumentSet;
use crate::error::{AppError, AppResult};
use crate::fetch::SchemaFetcher;
use crate::refs::{resolve_document_url, split_reference};
use serde_json::Value;
use std::collections::VecDeque;

/// Resolves the transitive closure of documents referenced from
/// `root_schema`, fetching each referenced document exactly once.
///
/// The returned set's first entry is the root document under `root_url`.
/// A document part that cannot be resolved against its owner's URL, or a
/// failed fetch, is an `AppError::Resolution`.
pub fn resolve(
    root_url: &str,
    root_schema: Value,
    fetcher: &impl SchemaFetcher,
) -> AppResult<DocumentSet> {
    let mut documents = DocumentSet::new();
    documents.insert(root_url, root_schema);

    let mut pending = VecDeque::new();
    pending.push_back(root_url.to_string());

    while let Some(path) = pending.pop_front() {
        // The walk needs an owned tree: fetches below mutate the set.
        let Some(document) = documents.get(&path).cloned() else {
            continue;
        };

        for target in collect_document_parts(&document) {
            let url = resolve_document_url(&target, &path).ok_or_else(|| {
                AppError::Resolution(format!(
                    "Cannot resolve document reference '{}' against '{}'",
                    target, path
                ))
            })?;

            if documents.contains(&url) {
                continue;
            }

            let fetched = fetcher.fetch(&url).map_err(|e| {
                AppError::Resolution(format!(
                    "Failed to fetch referenced document '{}': {}",
                    url, e
                ))
            })?;

            documents.insert(&url, fetched);
            pending.push_back(url);
        }
    }

    Ok(documents)
}

/// Collects the distinct non-empty document parts of every `$ref` in `node`,
/// in document order.
fn collect_document_parts(node: &Value) -> Vec<String> {
    let mut parts = Vec::new();
    collect_into(node, &mut parts);
    parts
}

fn collect_into(node: &Value, parts: &mut Vec<String>) {
    match node {
        Value::Array(items) => {
            for item in items {
                collect_into(item, parts);
            }
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                if key == "$ref" {
                    if let Some(target) = value.as_str() {
                        let (document, _) = split_reference(target);
                        if !document.is_empty() && !parts.iter().any(|p| p == document) {
                            parts.push(document.to_string());
                        }
                    }
                }
                collect_into(value, parts);
            }
        }
        _ => {}
    }
}
