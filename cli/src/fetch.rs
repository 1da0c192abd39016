#![deny(missing_docs)]

//! # HTTP Fetcher
//!
//! Blocking retrieval of schema documents. Every failure surfaces as a
//! retrieval error carrying the offending URL.

use armgen_core::error::{AppError, AppResult};
use armgen_core::fetch::SchemaFetcher;
use serde_json::Value;

/// `SchemaFetcher` backed by a blocking `ureq` client.
#[derive(Debug, Clone, Copy)]
pub struct HttpFetcher;

impl SchemaFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> AppResult<Value> {
        let mut response = ureq::get(url)
            .call()
            .map_err(|e| AppError::Retrieval(format!("GET {} failed: {}", url, e)))?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| AppError::Retrieval(format!("Failed to read body of {}: {}", url, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Retrieval(format!("Failed to parse {} as JSON: {}", url, e)))
    }
}
