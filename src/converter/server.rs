use super::{convert_named, text};
use crate::descriptor::{ServerDescriptor, ServerVariableDescriptor};
use crate::document::{Server, ServerVariable, ServerVariables};
use crate::extensions::convert_extensions;

/// Convert a server variable.
///
/// Only the description and extensions are carried over; the default value and the allowed
/// values are left unset.
pub fn convert_server_variable(descriptor: &ServerVariableDescriptor) -> ServerVariable {
    ServerVariable {
        enum_values: None,
        default: None,
        description: text(&descriptor.description),
        extensions: convert_extensions(&descriptor.extensions),
    }
}

/// Server variables keyed by variable name
pub fn convert_server_variables(descriptors: &[ServerVariableDescriptor]) -> Option<ServerVariables> {
    convert_named(descriptors, |d| d.name.clone(), convert_server_variable)
}

pub fn convert_server(descriptor: &ServerDescriptor) -> Server {
    Server {
        url: text(&descriptor.url),
        description: text(&descriptor.description),
        variables: convert_server_variables(&descriptor.variables),
        extensions: convert_extensions(&descriptor.extensions),
    }
}
