//! Vendor extension mapping.

use crate::descriptor::ExtensionDescriptor;
use crate::document::Extensions;
use std::collections::HashMap;

/// Convert extension descriptors into an `x-` keyed mapping.
///
/// Returns `None` for an empty slice. Property values are kept as the strings they were declared
/// as; a repeated extension or property name keeps the last value.
pub fn convert_extensions(descriptors: &[ExtensionDescriptor]) -> Option<Extensions> {
    if descriptors.is_empty() {
        return None;
    }

    let mut extensions = HashMap::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let properties: HashMap<String, String> = descriptor
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();
        extensions.insert(format!("x-{}", descriptor.name), properties);
    }
    Some(extensions)
}
