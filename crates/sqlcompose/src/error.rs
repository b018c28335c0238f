//! Error types for sqlcompose

use thiserror::Error;

/// Result type alias for builder operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Structural misuse reported by the builders.
///
/// Every variant is raised synchronously at the point of violation. A failing
/// call never leaves a partially applied change behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A required input was missing or empty (name, keyword, statement text...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operator arity mismatch or a missing operand
    #[error("Invalid operands: {0}")]
    InvalidOperands(String),

    /// The operation needs structure that does not exist yet
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Lookup against an absent key
    #[error("Not found: {0}")]
    NotFound(String),
}

impl SqlError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invalid operands error
    pub fn invalid_operands(message: impl Into<String>) -> Self {
        Self::InvalidOperands(message.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an invalid operands error
    pub fn is_invalid_operands(&self) -> bool {
        matches!(self, Self::InvalidOperands(_))
    }

    /// Check if this is an invalid state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
