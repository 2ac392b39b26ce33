//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl DomainError {
    /// Check if this error was caused by blank user input
    pub fn is_empty_query(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}
