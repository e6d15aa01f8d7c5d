use super::header::convert_headers;
use super::{convert_named, text};
use crate::descriptor::EncodingDescriptor;
use crate::document::Encoding;
use crate::extensions::convert_extensions;
use std::collections::HashMap;

/// Convert an encoding descriptor. The serialization style is not translated.
pub fn convert_encoding(descriptor: &EncodingDescriptor) -> Encoding {
    Encoding {
        content_type: text(&descriptor.content_type),
        headers: convert_headers(&descriptor.headers),
        style: None,
        explode: Some(descriptor.explode),
        allow_reserved: Some(descriptor.allow_reserved),
        extensions: convert_extensions(&descriptor.extensions),
    }
}

/// Encodings keyed by property name
pub fn convert_encodings(descriptors: &[EncodingDescriptor]) -> Option<HashMap<String, Encoding>> {
    convert_named(descriptors, |d| d.name.clone(), convert_encoding)
}
