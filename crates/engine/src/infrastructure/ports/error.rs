//! Error types for port operations.

/// Creation failures reported by the host-side persistence step.
///
/// Kept separate from import errors: a `CreationError` means the actor
/// document itself was well-formed.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    /// The host rejected the document (schema or validation failure).
    #[error("Actor rejected: {0}")]
    Rejected(String),

    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CreationError {
    /// Create a Rejected error.
    pub fn rejected(message: impl ToString) -> Self {
        Self::Rejected(message.to_string())
    }

    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if the host rejected the document outright.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_names_operation() {
        let err = CreationError::storage("write_actor", "disk full");
        assert_eq!(err.to_string(), "Storage error in write_actor: disk full");
        assert!(!err.is_rejected());
    }

    #[test]
    fn rejected_error_is_flagged() {
        let err = CreationError::rejected("actor name cannot be empty");
        assert!(err.is_rejected());
        assert_eq!(err.to_string(), "Actor rejected: actor name cannot be empty");
    }
}
