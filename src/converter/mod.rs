//! Converters from descriptors to document nodes.
//!
//! Each submodule handles one descriptor kind. Converters are plain functions: they read a
//! descriptor, build a fresh node and return it. The ones that may need to resolve an
//! implementation type take a [`SchemaResolver`](crate::resolver::SchemaResolver) and return a
//! [`Result`]; resolver failures are passed through untouched.
//!
//! Two conventions hold across all converters:
//!
//! - an unset (or empty) scalar leaves the node's field unset;
//! - an empty descriptor sequence yields no mapping at all, never an empty one.

pub mod content;
pub mod encoding;
pub mod example;
pub mod header;
pub mod link;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;

use crate::document::{component_ref, ComponentKind};
use crate::error::Result;
use std::collections::HashMap;

/// A scalar value, or `None` when unset or empty
pub(crate) fn text(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// A component reference, only when the descriptor supplies a non-empty name
pub(crate) fn reference(kind: ComponentKind, value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|name| component_ref(kind, name))
}

/// Convert a descriptor sequence into a mapping keyed by each descriptor's natural key.
///
/// The mapping is created when the first element is seen, so an empty sequence yields `None`.
pub(crate) fn convert_named<D, T>(
    descriptors: &[D],
    key: impl Fn(&D) -> String,
    convert: impl Fn(&D) -> T,
) -> Option<HashMap<String, T>> {
    let mut mapping: Option<HashMap<String, T>> = None;
    for descriptor in descriptors {
        mapping
            .get_or_insert_with(HashMap::new)
            .insert(key(descriptor), convert(descriptor));
    }
    mapping
}

/// Like [`convert_named`], stopping at the first conversion that fails
pub(crate) fn try_convert_named<D, T>(
    descriptors: &[D],
    key: impl Fn(&D) -> String,
    convert: impl Fn(&D) -> Result<T>,
) -> Result<Option<HashMap<String, T>>> {
    let mut mapping: Option<HashMap<String, T>> = None;
    for descriptor in descriptors {
        let value = convert(descriptor)?;
        mapping
            .get_or_insert_with(HashMap::new)
            .insert(key(descriptor), value);
    }
    Ok(mapping)
}
