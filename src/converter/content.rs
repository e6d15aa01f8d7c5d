use super::encoding::convert_encodings;
use super::example::convert_examples;
use super::schema::{convert_array_schema, convert_schema, has_implementation};
use super::{text, try_convert_named};
use crate::descriptor::ContentDescriptor;
use crate::document::{Content, MediaType};
use crate::error::Result;
use crate::extensions::convert_extensions;
use crate::resolver::SchemaResolver;
use log::debug;

/// Key used for content that does not declare a media type
pub const WILDCARD_MEDIA_TYPE: &str = "*/*";

/// Build the media type node for one content descriptor.
///
/// The array schema is used when its item schema names an implementation type; otherwise the
/// plain schema descriptor applies.
pub fn convert_media_type(
    descriptor: &ContentDescriptor,
    resolver: &dyn SchemaResolver,
) -> Result<MediaType> {
    let schema = if has_implementation(&descriptor.array.schema) {
        convert_array_schema(&descriptor.array, resolver)?
    } else {
        convert_schema(&descriptor.schema, resolver)?
    };

    Ok(MediaType {
        schema: Some(schema),
        examples: convert_examples(&descriptor.examples),
        encoding: convert_encodings(&descriptor.encoding),
        extensions: convert_extensions(&descriptor.extensions),
    })
}

/// Media types keyed by media-type string
pub fn convert_content(
    descriptors: &[ContentDescriptor],
    resolver: &dyn SchemaResolver,
) -> Result<Option<Content>> {
    debug!("Converting {} content descriptors", descriptors.len());
    try_convert_named(
        descriptors,
        |d| text(&d.media_type).unwrap_or_else(|| WILDCARD_MEDIA_TYPE.to_string()),
        |d| convert_media_type(d, resolver),
    )
}
