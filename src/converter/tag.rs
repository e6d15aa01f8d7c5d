use super::text;
use crate::descriptor::{ExternalDocsDescriptor, TagDescriptor};
use crate::document::{ExternalDocumentation, Tag};
use crate::extensions::convert_extensions;

pub fn convert_external_documentation(descriptor: &ExternalDocsDescriptor) -> ExternalDocumentation {
    ExternalDocumentation {
        description: text(&descriptor.description),
        url: text(&descriptor.url),
        extensions: convert_extensions(&descriptor.extensions),
    }
}

/// Convert a tag; its external documentation node is always built.
pub fn convert_tag(descriptor: &TagDescriptor) -> Tag {
    Tag {
        name: text(&descriptor.name),
        description: text(&descriptor.description),
        external_docs: Some(convert_external_documentation(&descriptor.external_docs)),
        extensions: convert_extensions(&descriptor.extensions),
    }
}
