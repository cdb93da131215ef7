//! Errors raised by domain types.
//!
//! Catalog construction and string/code conversions report through
//! [`DomainError`]. Import and persistence failures live in the engine.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A catalog or document invariant does not hold
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A string or wire code names no known variant
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Empty or colliding catalog keys, blank required text.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// For `FromStr`/`TryFrom` impls that receive an unrecognized value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message() {
        let err = DomainError::validation("catalog key cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: catalog key cannot be empty"
        );
    }

    #[test]
    fn parse_message() {
        let err = DomainError::parse("Unknown actor type: vehicle");
        assert_eq!(err.to_string(), "Parse error: Unknown actor type: vehicle");
    }
}
