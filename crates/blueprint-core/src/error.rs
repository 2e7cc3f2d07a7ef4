//! Error types for the synthesis library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all synthesis operations.
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Caller-supplied input failed validation
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The generated node graph is malformed (catalog authoring defect)
    #[error("Integrity error at node '{node}' (dependency '{dependency}'): {reason}")]
    Integrity {
        node: String,
        dependency: String,
        reason: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SynthesisError {
        SynthesisError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating graph integrity errors.
pub struct IntegrityErrorBuilder {
    node: String,
    dependency: String,
}

impl IntegrityErrorBuilder {
    /// Create a new integrity error builder for an offending edge.
    pub fn new(node: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            dependency: dependency.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SynthesisError {
        SynthesisError::Integrity {
            node: self.node,
            dependency: self.dependency,
            reason: reason.into(),
        }
    }
}

impl SynthesisError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for integrity errors on the edge `node -> dependency`.
    pub fn integrity(
        node: impl Into<String>,
        dependency: impl Into<String>,
    ) -> IntegrityErrorBuilder {
        IntegrityErrorBuilder::new(node, dependency)
    }

    /// Whether the error was caused by caller input rather than an internal
    /// defect.
    pub fn is_user_error(&self) -> bool {
        matches!(self, SynthesisError::InvalidInput { .. })
    }
}

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, SynthesisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = SynthesisError::invalid_input("idea_text").with_reason("must not be empty");
        assert!(err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'idea_text': must not be empty"
        );
    }

    #[test]
    fn test_integrity_builder() {
        let err = SynthesisError::integrity("ai-integration", "missing-node")
            .with_reason("dependency does not resolve");
        assert!(!err.is_user_error());
        let message = err.to_string();
        assert!(message.contains("ai-integration"));
        assert!(message.contains("missing-node"));
    }
}
