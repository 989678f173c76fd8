//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This domain has exactly one failure mode: input that does not satisfy a
/// construction precondition. It is raised synchronously at construction or
/// parse time, never by accessors or mutators. Expected business outcomes
/// (such as a parking pass that is already owned) are not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction. The message names the
    /// offending field so a caller can render field-specific feedback.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The human-readable reason carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput(msg) => msg,
        }
    }
}
