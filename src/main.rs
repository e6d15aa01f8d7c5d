//! OpenAPI from Descriptors - Command-line tool for translating API descriptors.
//!
//! Reads a bundle of descriptors (responses, tags, security requirements, servers, external
//! docs) from a YAML or JSON file and prints the matching OpenAPI nodes.
//!
//! # Usage
//!
//! ```bash
//! openapi-from-descriptors [OPTIONS] <DESCRIPTORS>
//! ```
//!
//! # Examples
//!
//! Translate descriptors whose schemas come from a Rust project:
//! ```bash
//! openapi-from-descriptors descriptors.yaml -t ./my-api-project -o openapi.yaml
//! ```
//!
//! Generate JSON:
//! ```bash
//! openapi-from-descriptors descriptors.yaml -f json -o openapi.json
//! ```

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use openapi_from_descriptors::cli;

fn main() -> Result<()> {
    // Parse once up front so the verbose flag can configure the logger
    let args = cli::CliArgs::parse();

    // RUST_LOG wins unless -v asks for debug output
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = cli::log_level_override(args.verbose) {
        builder.filter_level(level);
    }
    builder.init();

    info!("OpenAPI from Descriptors starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Translation completed successfully");

    Ok(())
}
