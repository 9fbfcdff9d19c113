//! Error types for the domain layer

use thiserror::Error;

/// Error type for domain value parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A timestamp string matched none of the accepted formats
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl DomainError {
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp(value.into())
    }
}
