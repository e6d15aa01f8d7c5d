use super::text;
use crate::descriptor::{ArraySchemaDescriptor, SchemaDescriptor};
use crate::document::Schema;
use crate::error::Result;
use crate::extensions::convert_extensions;
use crate::resolver::SchemaResolver;
use log::debug;

/// Whether the descriptor names an implementation type
pub fn has_implementation(descriptor: &SchemaDescriptor) -> bool {
    descriptor
        .implementation
        .as_deref()
        .is_some_and(|name| !name.is_empty())
}

/// Build a schema from a descriptor.
///
/// The base schema comes from the resolver when an implementation type is named, otherwise it
/// is blank. The descriptor's own name, description and extensions are then laid over it.
pub fn convert_schema(descriptor: &SchemaDescriptor, resolver: &dyn SchemaResolver) -> Result<Schema> {
    let base = match descriptor.implementation.as_deref().filter(|s| !s.is_empty()) {
        Some(type_name) => {
            debug!("Resolving schema for implementation type {}", type_name);
            resolver.resolve(type_name)?.schema
        }
        None => Schema::default(),
    };
    Ok(apply_overrides(base, descriptor))
}

/// Build an array schema whose items come from the descriptor's item schema.
///
/// Overrides are taken from the `array_schema` descriptor. The declared item-count bounds and
/// uniqueness flag are not carried over.
pub fn convert_array_schema(
    descriptor: &ArraySchemaDescriptor,
    resolver: &dyn SchemaResolver,
) -> Result<Schema> {
    let items = convert_schema(&descriptor.schema, resolver)?;
    let array = Schema {
        extensions: convert_extensions(&descriptor.extensions),
        ..Schema::array(items)
    };
    Ok(apply_overrides(array, &descriptor.array_schema))
}

fn apply_overrides(mut schema: Schema, overrides: &SchemaDescriptor) -> Schema {
    if let Some(name) = text(&overrides.name) {
        schema.name = Some(name);
    }
    if let Some(description) = text(&overrides.description) {
        schema.description = Some(description);
    }
    if let Some(extensions) = convert_extensions(&overrides.extensions) {
        schema.extensions = Some(extensions);
    }
    schema
}
