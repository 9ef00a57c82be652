//! Error types for introspection parsing and schema validation.

use thiserror::Error;

/// Error type for document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error, with the path of the offending value.
    #[error("JSON error at {path}: {source}")]
    Json {
        /// JSON path where decoding failed.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A named kind carries no name.
    #[error("{kind} type has no name")]
    UnnamedType {
        /// Kind of the offending node.
        kind: String,
    },

    /// A wrapper kind carries no wrapped type.
    #[error("{kind} wrapper has no ofType in {context}")]
    MissingOfType {
        /// Kind of the offending node.
        kind: String,
        /// Where the wrapper was found.
        context: String,
    },

    /// Duplicate type definition.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a JSON error from a path-tracking decode failure.
    pub fn json(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Json {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a missing ofType error.
    pub fn missing_of_type(kind: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingOfType {
            kind: kind.into(),
            context: context.into(),
        }
    }
}
