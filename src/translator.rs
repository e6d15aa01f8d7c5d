//! Translation entry points.
//!
//! [`Translator`] borrows a [`SchemaResolver`] and exposes one method per descriptor kind. Each
//! call builds a fresh node and shares nothing with earlier calls, so a translator can be reused
//! freely (and across threads, since resolvers are `Send + Sync`).
//!
//! # Example
//!
//! ```
//! use openapi_from_descriptors::descriptor::{ApiResponseDescriptor, ContentDescriptor, SchemaDescriptor};
//! use openapi_from_descriptors::document::Schema;
//! use openapi_from_descriptors::resolver::SchemaRegistry;
//! use openapi_from_descriptors::translator::Translator;
//!
//! let registry = SchemaRegistry::new().with_schema("Widget", Schema::of_type("object", None));
//! let translator = Translator::new(&registry);
//!
//! let responses = translator
//!     .responses(&[ApiResponseDescriptor {
//!         content: vec![ContentDescriptor {
//!             media_type: Some("application/json".to_string()),
//!             schema: SchemaDescriptor::implementation("Widget"),
//!             ..ContentDescriptor::default()
//!         }],
//!         ..ApiResponseDescriptor::new("200", "OK")
//!     }])
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(responses["200"].description.as_deref(), Some("OK"));
//! ```

use crate::converter::content::{convert_content, convert_media_type};
use crate::converter::encoding::{convert_encoding, convert_encodings};
use crate::converter::example::{convert_example, convert_examples};
use crate::converter::header::{convert_header, convert_headers};
use crate::converter::link::{convert_link, convert_links};
use crate::converter::response::{convert_api_response, convert_api_responses};
use crate::converter::schema::{convert_array_schema, convert_schema};
use crate::converter::security::convert_security_requirement;
use crate::converter::server::{convert_server, convert_server_variables};
use crate::converter::tag::{convert_external_documentation, convert_tag};
use crate::descriptor::{
    ApiResponseDescriptor, ArraySchemaDescriptor, ContentDescriptor, DescriptorSet,
    EncodingDescriptor, ExampleDescriptor, ExtensionDescriptor, ExternalDocsDescriptor,
    HeaderDescriptor, LinkDescriptor, SchemaDescriptor, SecurityRequirementDescriptor,
    ServerDescriptor, ServerVariableDescriptor, TagDescriptor,
};
use crate::document::{
    ApiResponse, ApiResponses, Content, Encoding, Example, ExternalDocumentation, Extensions,
    Header, Link, MediaType, Schema, SecurityRequirement, Server, ServerVariables, Tag,
    TranslatedDocument,
};
use crate::error::Result;
use crate::extensions::convert_extensions;
use crate::resolver::SchemaResolver;
use log::info;
use std::collections::HashMap;

/// Translates descriptor trees into document nodes
pub struct Translator<'r> {
    resolver: &'r dyn SchemaResolver,
}

impl<'r> Translator<'r> {
    pub fn new(resolver: &'r dyn SchemaResolver) -> Self {
        Self { resolver }
    }

    /// Responses keyed by status code, or `None` when there are no descriptors
    pub fn responses(&self, descriptors: &[ApiResponseDescriptor]) -> Result<Option<ApiResponses>> {
        convert_api_responses(descriptors, self.resolver)
    }

    pub fn response(&self, descriptor: &ApiResponseDescriptor) -> Result<ApiResponse> {
        convert_api_response(descriptor, self.resolver)
    }

    pub fn content(&self, descriptors: &[ContentDescriptor]) -> Result<Option<Content>> {
        convert_content(descriptors, self.resolver)
    }

    pub fn media_type(&self, descriptor: &ContentDescriptor) -> Result<MediaType> {
        convert_media_type(descriptor, self.resolver)
    }

    pub fn schema(&self, descriptor: &SchemaDescriptor) -> Result<Schema> {
        convert_schema(descriptor, self.resolver)
    }

    pub fn array_schema(&self, descriptor: &ArraySchemaDescriptor) -> Result<Schema> {
        convert_array_schema(descriptor, self.resolver)
    }

    pub fn link(&self, descriptor: &LinkDescriptor) -> Link {
        convert_link(descriptor)
    }

    pub fn links(&self, descriptors: &[LinkDescriptor]) -> Option<HashMap<String, Link>> {
        convert_links(descriptors)
    }

    pub fn header(&self, descriptor: &HeaderDescriptor) -> Header {
        convert_header(descriptor)
    }

    pub fn headers(&self, descriptors: &[HeaderDescriptor]) -> Option<HashMap<String, Header>> {
        convert_headers(descriptors)
    }

    pub fn example(&self, descriptor: &ExampleDescriptor) -> Example {
        convert_example(descriptor)
    }

    pub fn examples(&self, descriptors: &[ExampleDescriptor]) -> Option<HashMap<String, Example>> {
        convert_examples(descriptors)
    }

    pub fn encoding(&self, descriptor: &EncodingDescriptor) -> Encoding {
        convert_encoding(descriptor)
    }

    pub fn encodings(&self, descriptors: &[EncodingDescriptor]) -> Option<HashMap<String, Encoding>> {
        convert_encodings(descriptors)
    }

    pub fn server(&self, descriptor: &ServerDescriptor) -> Server {
        convert_server(descriptor)
    }

    pub fn server_variables(&self, descriptors: &[ServerVariableDescriptor]) -> Option<ServerVariables> {
        convert_server_variables(descriptors)
    }

    pub fn tag(&self, descriptor: &TagDescriptor) -> Tag {
        convert_tag(descriptor)
    }

    pub fn external_documentation(&self, descriptor: &ExternalDocsDescriptor) -> ExternalDocumentation {
        convert_external_documentation(descriptor)
    }

    pub fn security_requirement(&self, descriptor: &SecurityRequirementDescriptor) -> SecurityRequirement {
        convert_security_requirement(descriptor)
    }

    pub fn extensions(&self, descriptors: &[ExtensionDescriptor]) -> Option<Extensions> {
        convert_extensions(descriptors)
    }

    /// Translate a whole descriptor bundle.
    ///
    /// Fails on the first response whose content cannot be resolved.
    pub fn descriptor_set(&self, set: &DescriptorSet) -> Result<TranslatedDocument> {
        info!(
            "Translating {} responses, {} tags, {} security requirements, {} servers",
            set.responses.len(),
            set.tags.len(),
            set.security.len(),
            set.servers.len()
        );

        Ok(TranslatedDocument {
            responses: self.responses(&set.responses)?,
            tags: set.tags.iter().map(|t| self.tag(t)).collect(),
            security: set
                .security
                .iter()
                .map(|s| self.security_requirement(s))
                .collect(),
            servers: set.servers.iter().map(|s| self.server(s)).collect(),
            external_docs: set
                .external_docs
                .as_ref()
                .map(|d| self.external_documentation(d)),
        })
    }
}
