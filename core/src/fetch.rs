#![deny(missing_docs)]

//! # Schema Retrieval Seam
//!
//! The core never performs I/O itself; callers inject a [`SchemaFetcher`]
//! implementation (an HTTP client in the CLI, an in-memory map in tests).

use crate::error::AppResult;
use serde_json::Value;

/// Endpoint template used when no explicit schema URL is configured.
///
/// `{version}` is replaced with the requested API version.
pub const DEFAULT_SCHEMA_URL_TEMPLATE: &str =
    "https://schema.management.azure.com/schemas/{version}/deploymentTemplate.json";

/// Retrieves and parses one schema document by URL.
pub trait SchemaFetcher {
    /// Fetches `url` and parses the response body as JSON.
    ///
    /// Transport failures, non-success statuses and unparseable bodies map
    /// to `AppError::Retrieval`.
    fn fetch(&self, url: &str) -> AppResult<Value>;
}

/// Where the root schema document comes from.
#[derive(Debug, Clone, Default)]
pub struct SchemaSource {
    /// Explicit URL overriding the default endpoint template.
    pub url_override: Option<String>,
}

impl SchemaSource {
    /// Builds the root schema URL for `api_version`.
    pub fn url_for_version(&self, api_version: &str) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => DEFAULT_SCHEMA_URL_TEMPLATE.replace("{version}", api_version),
        }
    }
}
