//! Schema resolution for implementation types.
//!
//! When a schema descriptor names an implementation type, the translator asks a
//! [`SchemaResolver`] for that type's schema graph. How the graph is obtained is up to the
//! resolver: [`SchemaRegistry`] holds hand-registered schemas, while
//! [`SourceSchemaResolver`](crate::schema_generator::SourceSchemaResolver) derives them from
//! Rust source.

use crate::document::Schema;
use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;

/// A schema for one type together with the component schemas it references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSchema {
    /// Schema of the requested type
    pub schema: Schema,
    /// Named schemas produced while resolving, keyed by component name
    pub referenced_schemas: HashMap<String, Schema>,
}

impl ResolvedSchema {
    /// A resolved schema with no referenced components
    pub fn standalone(schema: Schema) -> Self {
        Self {
            schema,
            referenced_schemas: HashMap::new(),
        }
    }
}

/// Turns an implementation type name into a schema graph.
///
/// Resolution must be synchronous and side-effect free; failing to recognise a type is reported
/// as [`Error::UnresolvedType`].
pub trait SchemaResolver: Send + Sync {
    fn resolve(&self, type_name: &str) -> Result<ResolvedSchema>;
}

/// A resolver backed by an explicit table of schemas.
///
/// # Example
///
/// ```
/// use openapi_from_descriptors::document::Schema;
/// use openapi_from_descriptors::resolver::{SchemaRegistry, SchemaResolver};
///
/// let registry = SchemaRegistry::new().with_schema("Count", Schema::of_type("integer", Some("int64")));
/// let resolved = registry.resolve("Count").unwrap();
/// assert_eq!(resolved.schema.format.as_deref(), Some("int64"));
/// assert!(registry.resolve("Missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ResolvedSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema without referenced components
    pub fn with_schema(self, type_name: &str, schema: Schema) -> Self {
        self.with_resolved(type_name, ResolvedSchema::standalone(schema))
    }

    /// Register a full resolved schema graph
    pub fn with_resolved(mut self, type_name: &str, resolved: ResolvedSchema) -> Self {
        self.register(type_name, resolved);
        self
    }

    pub fn register(&mut self, type_name: &str, resolved: ResolvedSchema) {
        debug!("Registering schema for {}", type_name);
        self.schemas.insert(type_name.to_string(), resolved);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaResolver for SchemaRegistry {
    fn resolve(&self, type_name: &str) -> Result<ResolvedSchema> {
        self.schemas
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::unresolved(type_name))
    }
}
