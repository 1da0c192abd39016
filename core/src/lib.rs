#![deny(missing_docs)]

//! # Armgen Core
//!
//! Core library for the deployment-template schema importer.
//!
//! The pipeline fetches a root JSON Schema document, bundles every document
//! it transitively references, qualifies each document's local
//! `#/definitions/...` references with the owning document's path, extracts
//! one object definition per `definitions` entry, and registers one construct
//! per definition with a type generator.

/// Shared error types.
pub mod error;

/// `$ref` splitting and JSON Pointer helpers.
pub mod refs;

/// Path-addressed store for bundled documents.
pub mod document;

/// Schema retrieval seam and source configuration.
pub mod fetch;

/// Transitive document bundling.
pub mod bundler;

/// Reference namespacing.
pub mod namespace;

/// Definition extraction.
pub mod extract;

/// Construct registration and code emission.
pub mod generator;

/// The import pipeline driver.
pub mod import;

pub use bundler::resolve;
pub use document::DocumentSet;
pub use error::{AppError, AppResult};
pub use extract::{find_api_object_definitions, ObjectDefinition};
pub use fetch::{SchemaFetcher, SchemaSource};
pub use generator::{ConstructGenerator, ConstructRequest, TypeGenerator};
pub use import::{execute, ImportOptions};
pub use namespace::qualify_refs;
