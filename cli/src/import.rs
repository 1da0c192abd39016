#![deny(missing_docs)]

//! # Import Command
//!
//! Implements the pipeline: Schema URL -> Bundle -> Namespace -> Constructs.
//!
//! 1. **Fetch & Bundle**: Downloads the versioned schema and every document
//!    it references; drops `resolved.json` next to the run for inspection.
//! 2. **Namespace & Extract**: Qualifies document-local refs and lifts the
//!    `definitions` entries into construct registrations.
//! 3. **Generate**: Renders one serde-ready Rust struct per construct.

use armgen_core::error::{AppError, AppResult};
use armgen_core::fetch::{SchemaFetcher, SchemaSource};
use armgen_core::generator::ConstructGenerator;
use armgen_core::import::{self, ImportOptions};
use std::fs;
use std::path::PathBuf;

/// Arguments for the import command.
#[derive(clap::Args, Debug, Clone)]
pub struct ImportArgs {
    /// API version whose deployment-template schema to import.
    pub api_version: String,

    /// Only generate constructs with these fully-qualified names.
    #[clap(long)]
    pub include: Vec<String>,

    /// Skip constructs with these fully-qualified names.
    #[clap(long)]
    pub exclude: Vec<String>,

    /// Explicit schema URL overriding the default endpoint.
    #[clap(long, env = "SCHEMA_DEFINITION_URL")]
    pub schema_url: Option<String>,

    /// Output path for the generated code.
    /// If not provided, prints to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Directory receiving the bundled-schema dump (resolved.json).
    #[clap(long, default_value = ".")]
    pub dump_dir: PathBuf,
}

/// Executes the import pipeline.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `fetcher` - The client used to retrieve schema documents.
pub fn execute(args: &ImportArgs, fetcher: &impl SchemaFetcher) -> AppResult<()> {
    println!(
        "Importing deployment template schema for {}...",
        args.api_version
    );

    let options = ImportOptions {
        api_version: args.api_version.clone(),
        source: SchemaSource {
            url_override: args.schema_url.clone(),
        },
        include: args.include.clone(),
        exclude: args.exclude.clone(),
        dump_dir: args.dump_dir.clone(),
    };

    let mut generator = ConstructGenerator::new();
    let code = import::execute(&options, fetcher, &mut generator)?;

    println!("Registered {} constructs.", generator.len());

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output directory: {}", e))
                })?;
            }
        }
        fs::write(out_path, code)
            .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
        println!("Constructs generated at {:?}", out_path);
    } else {
        println!("{}", code);
    }

    Ok(())
}
