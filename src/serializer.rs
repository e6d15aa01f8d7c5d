//! Serialization of translated documents to YAML or JSON.
//!
//! Formatting is left entirely to `serde_yaml` and `serde_json`.

use crate::document::TranslatedDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a translated document to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(doc: &TranslatedDocument) -> Result<String> {
    debug!("Serializing translated document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize document to YAML")
}

/// Serializes a translated document to pretty-printed JSON.
pub fn serialize_json(doc: &TranslatedDocument) -> Result<String> {
    debug!("Serializing translated document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize document to JSON")
}

/// Writes string content to a file, creating parent directories as needed.
///
/// An existing file is overwritten.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ApiResponse, Header, SecurityRequirement, Server, Tag};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_test_document() -> TranslatedDocument {
        let mut headers = HashMap::new();
        headers.insert(
            "X-Rate-Limit".to_string(),
            Header {
                reference: Some("#/components/headers/RateLimit".to_string()),
                ..Header::default()
            },
        );
        let mut extension = HashMap::new();
        extension.insert("owner".to_string(), "platform".to_string());
        let mut extensions = HashMap::new();
        extensions.insert("x-audit".to_string(), extension);

        let mut responses = HashMap::new();
        responses.insert(
            "200".to_string(),
            ApiResponse {
                description: Some("OK".to_string()),
                headers: Some(headers),
                extensions: Some(extensions),
                ..ApiResponse::default()
            },
        );

        TranslatedDocument {
            responses: Some(responses),
            tags: vec![Tag {
                name: Some("widgets".to_string()),
                ..Tag::default()
            }],
            security: vec![SecurityRequirement::new().add_list("oauth", vec!["read".to_string()])],
            servers: vec![Server {
                url: Some("https://api.example.com".to_string()),
                ..Server::default()
            }],
            external_docs: None,
        }
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&create_test_document()).unwrap();

        assert!(yaml.contains("responses:"));
        assert!(yaml.contains("description: OK"));
        assert!(yaml.contains("$ref"));
        assert!(yaml.contains("#/components/headers/RateLimit"));
        assert!(yaml.contains("x-audit:"));
        assert!(yaml.contains("oauth:"));
        assert!(!yaml.contains("externalDocs"));
    }

    #[test]
    fn test_serialize_json_field_names() {
        let json = serialize_json(&create_test_document()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let ok = &parsed["responses"]["200"];
        assert_eq!(ok["description"], "OK");
        assert_eq!(
            ok["headers"]["X-Rate-Limit"]["$ref"],
            "#/components/headers/RateLimit"
        );
        assert_eq!(ok["x-audit"]["owner"], "platform");
        assert!(ok.get("content").is_none());
        assert_eq!(parsed["security"][0]["oauth"][0], "read");
        assert_eq!(parsed["servers"][0]["url"], "https://api.example.com");
        assert!(parsed.get("externalDocs").is_none());
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let json = serialize_json(&create_test_document()).unwrap();

        assert!(json.contains('\n'));
        assert!(json.lines().count() > 5);
    }

    #[test]
    fn test_empty_document_serializes_to_empty_object() {
        let json = serialize_json(&TranslatedDocument::default()).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("openapi.yaml");

        write_to_file("test content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("subdir").join("nested").join("openapi.json");

        write_to_file("{}", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("openapi.yaml");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }
}
