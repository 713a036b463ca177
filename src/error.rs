//! Error types for the association layer
//!
//! Provides error handling for document attribute access, identifier
//! conversion, and association metadata configuration.

use std::fmt;

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Error types for document and association operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Attribute access failed
    Attribute(String),
    /// A value could not be used as a document identifier
    InvalidKey(String),
    /// Association metadata is invalid
    Configuration(String),
    /// Association lookup or resolution failed
    Association(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Attribute(msg) => write!(f, "Attribute error: {}", msg),
            DocumentError::InvalidKey(msg) => write!(f, "Invalid key error: {}", msg),
            DocumentError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            DocumentError::Association(msg) => write!(f, "Association error: {}", msg),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Error types for association declaration and resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssociationError {
    #[error("Association '{0}' is not registered")]
    NotFound(String),

    #[error("Invalid association configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Ambiguous inverse for '{model}.{relation}': candidates are {candidates:?}; declare the inverse explicitly")]
    AmbiguousInverse {
        model: String,
        relation: String,
        candidates: Vec<String>,
    },
}

impl From<AssociationError> for DocumentError {
    fn from(err: AssociationError) -> Self {
        match err {
            AssociationError::InvalidConfiguration(msg) => DocumentError::Configuration(msg),
            other => DocumentError::Association(other.to_string()),
        }
    }
}
