use crate::descriptor::DescriptorSet;
use crate::resolver::{SchemaRegistry, SchemaResolver};
use crate::schema_generator::SourceSchemaResolver;
use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
use crate::translator::Translator;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// OpenAPI from Descriptors - Translate API descriptor files into OpenAPI documents
#[derive(Parser, Debug)]
#[command(name = "openapi-from-descriptors")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the descriptor file (YAML or JSON)
    #[arg(value_name = "DESCRIPTORS")]
    pub descriptors_path: PathBuf,

    /// Rust project whose types back `implementation` references
    #[arg(short = 't', long = "types", value_name = "PROJECT_PATH")]
    pub types_path: Option<PathBuf>,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Level forced on the logger by `-v`; otherwise `RUST_LOG` decides
pub fn log_level_override(verbose: bool) -> Option<log::LevelFilter> {
    verbose.then_some(log::LevelFilter::Debug)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.descriptors_path.is_file() {
        anyhow::bail!(
            "Descriptor file does not exist: {}",
            args.descriptors_path.display()
        );
    }

    if let Some(ref types_path) = args.types_path {
        if !types_path.is_dir() {
            anyhow::bail!("Types path is not a directory: {}", types_path.display());
        }
    }

    info!("Descriptor file: {}", args.descriptors_path.display());
    match args.types_path {
        Some(ref types_path) => info!("Types project: {}", types_path.display()),
        None => info!("Types project: none"),
    }
    info!("Output format: {:?}", args.output_format);
    match args.output_path {
        Some(ref output) => info!("Output file: {}", output.display()),
        None => info!("Output: stdout"),
    }

    Ok(args)
}

/// Decode a descriptor bundle from a YAML or JSON file
pub fn load_descriptors(path: &Path) -> Result<DescriptorSet> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {}", path.display()))?;
    serde_yaml::from_str(&source)
        .with_context(|| format!("Failed to decode descriptor file: {}", path.display()))
}

fn build_resolver(types_path: Option<&Path>) -> Result<Box<dyn SchemaResolver>> {
    match types_path {
        Some(root) => Ok(Box::new(SourceSchemaResolver::from_project(root)?)),
        None => Ok(Box::new(SchemaRegistry::new())),
    }
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Loading descriptors...");
    let descriptors = load_descriptors(&args.descriptors_path)?;

    let resolver = build_resolver(args.types_path.as_deref())?;

    info!("Translating descriptors...");
    let document = Translator::new(resolver.as_ref())
        .descriptor_set(&descriptors)
        .context("Failed to translate descriptors")?;

    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&document)?,
        OutputFormat::Json => serialize_json(&document)?,
    };

    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
    } else {
        println!("{}", content);
    }

    info!("Summary:");
    info!(
        "  - Responses: {}",
        document.responses.as_ref().map_or(0, |r| r.len())
    );
    info!("  - Tags: {}", document.tags.len());
    info!("  - Servers: {}", document.servers.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn args(descriptors_path: PathBuf) -> CliArgs {
        CliArgs {
            descriptors_path,
            types_path: None,
            output_format: OutputFormat::Json,
            output_path: None,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_cli_arguments() {
        let args = CliArgs::parse_from([
            "openapi-from-descriptors",
            "descriptors.yaml",
            "-t",
            "./service",
            "-f",
            "json",
            "-o",
            "out.json",
            "-v",
        ]);

        assert_eq!(args.descriptors_path, PathBuf::from("descriptors.yaml"));
        assert_eq!(args.types_path, Some(PathBuf::from("./service")));
        assert!(matches!(args.output_format, OutputFormat::Json));
        assert_eq!(args.output_path, Some(PathBuf::from("out.json")));
        assert!(args.verbose);
    }

    #[test]
    fn test_log_level_forced_only_when_verbose() {
        assert_eq!(log_level_override(true), Some(log::LevelFilter::Debug));
        assert_eq!(log_level_override(false), None);
    }

    #[test]
    fn test_validation_rejects_missing_descriptor_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = parse_args_from_parsed(args(temp_dir.path().join("missing.yaml")));

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_non_directory_types_path() {
        let temp_dir = TempDir::new().unwrap();
        let descriptors = write(&temp_dir, "descriptors.yaml", "{}");

        let result = parse_args_from_parsed(CliArgs {
            types_path: Some(descriptors.clone()),
            ..args(descriptors)
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_load_descriptors_accepts_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "descriptors.json",
            r#"{"responses": [{"responseCode": "200", "description": "OK"}]}"#,
        );

        let descriptors = load_descriptors(&path).unwrap();

        assert_eq!(descriptors.responses[0].response_code, "200");
    }

    #[test]
    fn test_load_descriptors_reports_decode_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "descriptors.yaml", "responses: 42");

        let err = load_descriptors(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to decode descriptor file"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let descriptors = write(
            &temp_dir,
            "descriptors.yaml",
            "responses:\n  - responseCode: \"404\"\n    description: Not Found\n",
        );
        let output = temp_dir.path().join("out").join("openapi.json");

        run(CliArgs {
            output_path: Some(output.clone()),
            ..args(descriptors)
        })
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["responses"]["404"]["description"], "Not Found");
    }

    #[test]
    fn test_run_without_types_fails_on_implementation() {
        let temp_dir = TempDir::new().unwrap();
        let descriptors = write(
            &temp_dir,
            "descriptors.yaml",
            "responses:\n  - content:\n      - schema:\n          implementation: Widget\n",
        );

        let err = run(CliArgs {
            output_path: Some(temp_dir.path().join("openapi.json")),
            ..args(descriptors)
        })
        .unwrap_err();

        assert!(err.to_string().contains("Failed to translate descriptors"));
    }
}
