use super::{convert_named, reference, text};
use crate::descriptor::ExampleDescriptor;
use crate::document::{ComponentKind, Example};
use crate::extensions::convert_extensions;
use std::collections::HashMap;

/// The literal value is carried as a JSON string; it is not parsed.
pub fn convert_example(descriptor: &ExampleDescriptor) -> Example {
    Example {
        summary: text(&descriptor.summary),
        description: text(&descriptor.description),
        value: text(&descriptor.value).map(serde_json::Value::String),
        external_value: text(&descriptor.external_value),
        reference: reference(ComponentKind::Examples, &descriptor.reference),
        extensions: convert_extensions(&descriptor.extensions),
    }
}

/// Examples keyed by example name
pub fn convert_examples(descriptors: &[ExampleDescriptor]) -> Option<HashMap<String, Example>> {
    convert_named(descriptors, |d| d.name.clone(), convert_example)
}
