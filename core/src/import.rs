#![deny(missing_docs)]

//! # Import Pipeline
//!
//! Drives one import run: fetch the root schema, bundle every referenced
//! document, dump the bundled set for inspection, namespace each document's
//! local references, extract object definitions and register one construct
//! per definition, then trigger final code generation exactly once.

use crate::bundler;
use crate::document::DocumentSet;
use crate::error::{AppError, AppResult};
use crate::extract::find_api_object_definitions;
use crate::fetch::{SchemaFetcher, SchemaSource};
use crate::generator::{ConstructRequest, TypeGenerator};
use crate::namespace::qualify_refs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the diagnostic dump written after bundling.
pub const RESOLVED_DUMP_FILE: &str = "resolved.json";

/// Options controlling one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// API version whose schema family to import.
    pub api_version: String,
    /// Root schema location.
    pub source: SchemaSource,
    /// When non-empty, only these fully-qualified names reach the generator.
    pub include: Vec<String>,
    /// These fully-qualified names never reach the generator.
    pub exclude: Vec<String>,
    /// Directory receiving the bundled-schema dump.
    pub dump_dir: PathBuf,
}

impl ImportOptions {
    /// Creates options for `api_version` with no filters, dumping into the
    /// working directory.
    pub fn new(api_version: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            source: SchemaSource::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            dump_dir: PathBuf::from("."),
        }
    }

    /// Whether a record with `fqn` passes the include/exclude filters.
    fn selects(&self, fqn: &str) -> bool {
        if !self.include.is_empty() && !self.include.iter().any(|f| f == fqn) {
            return false;
        }
        !self.exclude.iter().any(|f| f == fqn)
    }
}

/// Runs the full import pipeline and returns the generated source.
///
/// A retrieval or bundling failure aborts before any construct is
/// registered; a rejected construct halts the remaining registrations.
/// `generate` is invoked exactly once, after all registrations.
///
/// # Arguments
///
/// * `options` - Run configuration.
/// * `fetcher` - The client used to retrieve schema documents.
/// * `generator` - The collaborator accumulating constructs.
pub fn execute(
    options: &ImportOptions,
    fetcher: &impl SchemaFetcher,
    generator: &mut impl TypeGenerator,
) -> AppResult<String> {
    let root_url = options.source.url_for_version(&options.api_version);
    let root_schema = fetcher.fetch(&root_url)?;

    let mut documents = bundler::resolve(&root_url, root_schema, fetcher)?;

    write_resolved_dump(&options.dump_dir, &documents)?;

    // Every document is namespaced before any extraction runs.
    for path in documents.paths() {
        if let Some(document) = documents.get(&path) {
            let namespaced = qualify_refs(&path, document);
            documents.set(&path, namespaced);
        }
    }

    for path in documents.paths() {
        let Some(document) = documents.get(&path) else {
            continue;
        };
        for definition in find_api_object_definitions(document) {
            let fqn = definition.fqn();
            if !options.selects(&fqn) {
                continue;
            }
            generator.emit_construct(ConstructRequest {
                fqn,
                kind: definition.name,
                schema: definition.schema,
            })?;
        }
    }

    let mut sink = String::new();
    generator.generate(&mut sink)?;
    Ok(sink)
}

/// Writes the bundled (pre-namespacing) document values into
/// `dir/resolved.json` for inspection.
fn write_resolved_dump(dir: &Path, documents: &DocumentSet) -> AppResult<()> {
    let values: Vec<&Value> = documents.values().collect();
    let rendered = serde_json::to_string_pretty(&values).map_err(|e| {
        AppError::General(format!("Failed to serialize resolved schema dump: {}", e))
    })?;
    fs::write(dir.join(RESOLVED_DUMP_FILE), rendered)?;
    Ok(())
}
