/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
///
/// Translation only fails when a schema resolver cannot produce a schema. File handling in the
/// scanner, parser, serializer and CLI reports through `anyhow` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A schema descriptor named an implementation type the resolver does not know
    UnresolvedType { type_name: String },
}

impl Error {
    pub fn unresolved(type_name: &str) -> Self {
        Error::UnresolvedType {
            type_name: type_name.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnresolvedType { type_name } => {
                write!(f, "cannot resolve implementation type: {}", type_name)
            }
        }
    }
}

impl std::error::Error for Error {}
