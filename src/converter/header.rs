use super::{convert_named, reference, text};
use crate::descriptor::HeaderDescriptor;
use crate::document::{ComponentKind, Header};
use std::collections::HashMap;

pub fn convert_header(descriptor: &HeaderDescriptor) -> Header {
    Header {
        description: text(&descriptor.description),
        reference: reference(ComponentKind::Headers, &descriptor.reference),
        required: Some(descriptor.required),
        deprecated: Some(descriptor.deprecated),
    }
}

/// Headers keyed by header name
pub fn convert_headers(descriptors: &[HeaderDescriptor]) -> Option<HashMap<String, Header>> {
    convert_named(descriptors, |d| d.name.clone(), convert_header)
}
