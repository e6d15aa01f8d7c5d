//! Descriptor model - the declarative input the translator consumes.
//!
//! Descriptors are plain data attached to API elements by the caller. They are decoded with
//! `serde`, and the decoder is where the "empty string means unspecified" convention ends:
//! every optional scalar becomes `None` when it is missing *or* empty, so the converters only
//! ever test presence.
//!
//! Natural keys (header names, example names, status codes, ...) stay plain `String`s because
//! a key is always written to the output mapping, even when it is blank.
//!
//! # Example
//!
//! ```
//! use openapi_from_descriptors::descriptor::ApiResponseDescriptor;
//!
//! let yaml = r#"
//! responseCode: "404"
//! description: ""
//! "#;
//! let response: ApiResponseDescriptor = serde_yaml::from_str(yaml).unwrap();
//! assert_eq!(response.response_code, "404");
//! assert!(response.description.is_none());
//! ```

use serde::{Deserialize, Deserializer};

/// Decode an optional string, treating `""` the same as a missing field.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn default_response_code() -> String {
    "default".to_string()
}

/// A single `name = value` pair inside a vendor extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionPropertyDescriptor {
    pub name: String,
    pub value: String,
}

/// A vendor extension; rendered as `x-<name>` in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionDescriptor {
    pub name: String,
    pub properties: Vec<ExtensionPropertyDescriptor>,
}

impl ExtensionDescriptor {
    /// Create an extension with the given properties
    pub fn new(name: &str, properties: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            properties: properties
                .iter()
                .map(|(name, value)| ExtensionPropertyDescriptor {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

/// Describes a schema, either from scratch or by naming an implementation type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaDescriptor {
    /// Name of the type handed to the schema resolver
    #[serde(deserialize_with = "empty_as_none")]
    pub implementation: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub extensions: Vec<ExtensionDescriptor>,
}

impl SchemaDescriptor {
    /// Schema descriptor backed by an implementation type
    pub fn implementation(type_name: &str) -> Self {
        Self {
            implementation: Some(type_name.to_string()),
            ..Self::default()
        }
    }
}

/// Describes an array whose items are given by `schema`.
///
/// `min_items`, `max_items` and `unique_items` are decoded but not translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArraySchemaDescriptor {
    /// Item schema
    pub schema: SchemaDescriptor,
    /// Overrides for the array schema itself
    pub array_schema: SchemaDescriptor,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub unique_items: bool,
    pub extensions: Vec<ExtensionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderDescriptor {
    pub name: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(rename = "ref", deserialize_with = "empty_as_none")]
    pub reference: Option<String>,
    pub required: bool,
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExampleDescriptor {
    pub name: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub value: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub external_value: Option<String>,
    #[serde(rename = "ref", deserialize_with = "empty_as_none")]
    pub reference: Option<String>,
    pub extensions: Vec<ExtensionDescriptor>,
}

/// Describes how a single property of a multipart/form body is encoded.
///
/// `style` is decoded but not translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodingDescriptor {
    pub name: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub content_type: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub style: Option<String>,
    pub explode: bool,
    pub allow_reserved: bool,
    pub headers: Vec<HeaderDescriptor>,
    pub extensions: Vec<ExtensionDescriptor>,
}

/// One media type entry of a request or response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDescriptor {
    /// Media type key; `*/*` when unspecified
    #[serde(deserialize_with = "empty_as_none")]
    pub media_type: Option<String>,
    pub schema: SchemaDescriptor,
    /// Used instead of `schema` when its item schema names an implementation type
    pub array: ArraySchemaDescriptor,
    pub examples: Vec<ExampleDescriptor>,
    pub encoding: Vec<EncodingDescriptor>,
    pub extensions: Vec<ExtensionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkParameterDescriptor {
    pub name: String,
    pub expression: String,
}

/// A server URL template variable.
///
/// `default_value` and `allowable_values` are decoded but not translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerVariableDescriptor {
    pub name: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(rename = "default", deserialize_with = "empty_as_none")]
    pub default_value: Option<String>,
    pub allowable_values: Vec<String>,
    pub extensions: Vec<ExtensionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerDescriptor {
    #[serde(deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub variables: Vec<ServerVariableDescriptor>,
    pub extensions: Vec<ExtensionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub name: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub operation_ref: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub operation_id: Option<String>,
    pub parameters: Vec<LinkParameterDescriptor>,
    /// Runtime expression for the request body
    #[serde(deserialize_with = "empty_as_none")]
    pub request_body: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(rename = "ref", deserialize_with = "empty_as_none")]
    pub reference: Option<String>,
    pub server: ServerDescriptor,
    pub extensions: Vec<ExtensionDescriptor>,
}

/// One possible response of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiResponseDescriptor {
    /// HTTP status code or `default`
    pub response_code: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub headers: Vec<HeaderDescriptor>,
    pub content: Vec<ContentDescriptor>,
    pub links: Vec<LinkDescriptor>,
    pub extensions: Vec<ExtensionDescriptor>,
    #[serde(rename = "ref", deserialize_with = "empty_as_none")]
    pub reference: Option<String>,
}

impl Default for ApiResponseDescriptor {
    fn default() -> Self {
        Self {
            response_code: default_response_code(),
            description: None,
            headers: Vec::new(),
            content: Vec::new(),
            links: Vec::new(),
            extensions: Vec::new(),
            reference: None,
        }
    }
}

impl ApiResponseDescriptor {
    /// Create a response descriptor with a status code and description
    pub fn new(response_code: &str, description: &str) -> Self {
        Self {
            response_code: response_code.to_string(),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalDocsDescriptor {
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    pub extensions: Vec<ExtensionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagDescriptor {
    #[serde(deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub external_docs: ExternalDocsDescriptor,
    pub extensions: Vec<ExtensionDescriptor>,
}

/// A security scheme name with the scopes an operation needs from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecurityRequirementDescriptor {
    pub name: String,
    pub scopes: Vec<String>,
}

/// A bundle of top-level descriptors, as read by the command-line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DescriptorSet {
    pub responses: Vec<ApiResponseDescriptor>,
    pub tags: Vec<TagDescriptor>,
    pub security: Vec<SecurityRequirementDescriptor>,
    pub servers: Vec<ServerDescriptor>,
    pub external_docs: Option<ExternalDocsDescriptor>,
}
