use super::server::convert_server;
use super::{convert_named, reference, text};
use crate::descriptor::{LinkDescriptor, LinkParameterDescriptor};
use crate::document::{ComponentKind, Link};
use crate::extensions::convert_extensions;
use std::collections::HashMap;

/// Convert a link.
///
/// The request body expression is stored as a plain JSON string, not evaluated. The server node
/// is always built, even from a blank server descriptor.
pub fn convert_link(descriptor: &LinkDescriptor) -> Link {
    Link {
        operation_ref: text(&descriptor.operation_ref),
        operation_id: text(&descriptor.operation_id),
        parameters: convert_link_parameters(&descriptor.parameters),
        request_body: text(&descriptor.request_body).map(serde_json::Value::String),
        description: text(&descriptor.description),
        reference: reference(ComponentKind::Links, &descriptor.reference),
        server: Some(convert_server(&descriptor.server)),
        extensions: convert_extensions(&descriptor.extensions),
    }
}

/// Link parameters, name to runtime expression
pub fn convert_link_parameters(
    descriptors: &[LinkParameterDescriptor],
) -> Option<HashMap<String, String>> {
    convert_named(descriptors, |d| d.name.clone(), |d| d.expression.clone())
}

/// Links keyed by link name
pub fn convert_links(descriptors: &[LinkDescriptor]) -> Option<HashMap<String, Link>> {
    convert_named(descriptors, |d| d.name.clone(), convert_link)
}
