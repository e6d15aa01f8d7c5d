//! OpenAPI from Descriptors - Translate descriptor trees into OpenAPI document nodes.
//!
//! Descriptors are plain data records mirroring the OpenAPI annotations a web service would
//! place on its handlers: responses, content, headers, links, servers, tags and so on. This
//! library turns them into the matching nodes of an OpenAPI 3 document, resolving the schemas of
//! named implementation types through a pluggable [`resolver::SchemaResolver`].
//!
//! # Architecture
//!
//! 1. [`descriptor`] - Descriptor model, decodable from YAML or JSON
//! 2. [`document`] - OpenAPI document model, serializable to YAML or JSON
//! 3. [`extensions`] - Vendor extension mapping (`x-*` keys)
//! 4. [`converter`] - One converter per descriptor kind
//! 5. [`resolver`] - The schema resolver seam and an explicit registry resolver
//! 6. [`scanner`], [`parser`], [`type_resolver`], [`schema_generator`] - A resolver that reads
//!    type definitions straight from Rust source files
//! 7. [`translator`] - Entry points tying converters and resolver together
//! 8. [`serializer`] - Writes translated documents as YAML or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use openapi_from_descriptors::{
//!     descriptor::DescriptorSet,
//!     schema_generator::SourceSchemaResolver,
//!     serializer::serialize_yaml,
//!     translator::Translator,
//! };
//! use std::path::Path;
//!
//! // Index the types of a project
//! let resolver = SourceSchemaResolver::from_project(Path::new("./my-project")).unwrap();
//!
//! // Decode descriptors
//! let descriptors: DescriptorSet =
//!     serde_yaml::from_str(&std::fs::read_to_string("descriptors.yaml").unwrap()).unwrap();
//!
//! // Translate and print
//! let document = Translator::new(&resolver).descriptor_set(&descriptors).unwrap();
//! println!("{}", serialize_yaml(&document).unwrap());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod converter;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod extensions;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod schema_generator;
pub mod serializer;
pub mod translator;
pub mod type_resolver;
