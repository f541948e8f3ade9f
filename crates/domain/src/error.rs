//! Unified error types for the domain layer
//!
//! Game transitions never fail; these errors only surface when building
//! value objects (board topology, die faces) from untrusted input.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a value outside its allowed range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates a validation error for out-of-range or malformed values.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=6).contains(&face) {
    ///     return Err(DomainError::validation(format!("die face {face} out of range")));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("die face 7 out of range");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: die face 7 out of range");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("cell 16 is both a snake and a ladder");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(
            err.to_string(),
            "Constraint violation: cell 16 is both a snake and a ladder"
        );
    }
}
