//! Shared Error Types
//!
//! Error types that can be produced on both sides of the HTTP boundary:
//! request validation failures and request bodies that are not the JSON
//! shape an endpoint expects.
//!
//! # Usage
//!
//! ```rust
//! use accountd::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "email must be an email");
//! assert!(error.to_string().contains("email"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Body is not valid JSON, or has a field of the wrong type
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Request validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "email must be an email");
        match error {
            SharedError::ValidationError { ref field, ref message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "email must be an email");
            }
            _ => panic!("Expected ValidationError"),
        }
        assert_eq!(error.field(), Some("email"));
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::serialization("Test error");
        let display = format!("{}", error);
        assert!(display.contains("Serialization error"));
        assert!(display.contains("Test error"));
        assert_eq!(error.field(), None);
    }
}
