#![deny(missing_docs)]

//! # Armgen CLI
//!
//! Command Line Interface for the deployment-template schema importer.
//!
//! Supported Commands:
//! - `import`: Pipeline Schema URL -> Bundle -> Namespace -> Constructs.

use armgen_core::AppResult;
use clap::{Parser, Subcommand};

use crate::fetch::HttpFetcher;

mod fetch;
mod import;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Deployment-template importer CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Imports a deployment-template schema family and generates constructs.
    Import(import::ImportArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Import(args) => {
            // Injecting the blocking HTTP client
            let fetcher = HttpFetcher;
            import::execute(args, &fetcher)?;
        }
    }

    Ok(())
}
