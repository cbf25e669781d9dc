//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not forwardable through the gateway.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The vendor origin or endpoint URL is malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
