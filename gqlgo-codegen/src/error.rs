//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] gqlgo_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] gqlgo_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema violates the introspection contract.
    #[error("malformed schema: {message}")]
    MalformedSchema {
        /// Error message.
        message: String,
    },

    /// A kind that cannot be placed or rendered.
    #[error("don't know how to generate {kind} type '{name}'")]
    UnsupportedKind {
        /// Kind of the type.
        kind: String,
        /// Type name, or `<unnamed>`.
        name: String,
    },

    /// A predeclared scalar name configured with a different backing type.
    #[error("the scalar {scalar} named '{name}' could not have the type '{type_name}'")]
    ScalarConflict {
        /// Schema name of the scalar.
        scalar: String,
        /// Configured Go name.
        name: String,
        /// Configured backing type.
        type_name: String,
    },

    /// A scalar that needs a declaration but has no backing type.
    #[error("the definition for the scalar '{scalar}' could not be generated without a type")]
    MissingScalarType {
        /// Go name of the scalar.
        scalar: String,
    },
}

impl CodegenError {
    /// Creates a malformed schema error with the given message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSchema {
            message: message.into(),
        }
    }

    /// Creates an unsupported kind error for a type node.
    pub fn unsupported(ty: &gqlgo_schema::SchemaType) -> Self {
        Self::UnsupportedKind {
            kind: ty.kind.to_string(),
            name: ty.name().unwrap_or("<unnamed>").to_string(),
        }
    }
}

/// Result alias for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;
