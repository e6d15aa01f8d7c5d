use super::content::convert_content;
use super::header::convert_headers;
use super::link::convert_links;
use super::{reference, text, try_convert_named};
use crate::descriptor::ApiResponseDescriptor;
use crate::document::{ApiResponse, ApiResponses, ComponentKind};
use crate::error::Result;
use crate::extensions::convert_extensions;
use crate::resolver::SchemaResolver;
use log::debug;

pub fn convert_api_response(
    descriptor: &ApiResponseDescriptor,
    resolver: &dyn SchemaResolver,
) -> Result<ApiResponse> {
    debug!("Converting response {}", descriptor.response_code);
    Ok(ApiResponse {
        description: text(&descriptor.description),
        headers: convert_headers(&descriptor.headers),
        content: convert_content(&descriptor.content, resolver)?,
        links: convert_links(&descriptor.links),
        extensions: convert_extensions(&descriptor.extensions),
        reference: reference(ComponentKind::Responses, &descriptor.reference),
    })
}

/// Responses keyed by status code
pub fn convert_api_responses(
    descriptors: &[ApiResponseDescriptor],
    resolver: &dyn SchemaResolver,
) -> Result<Option<ApiResponses>> {
    try_convert_named(
        descriptors,
        |d| d.response_code.clone(),
        |d| convert_api_response(d, resolver),
    )
}
