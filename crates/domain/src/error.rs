//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A credential document has an invalid structure.
    #[error("invalid credential record: {0}")]
    InvalidCredentialRecord(String),

    /// A route path could not be resolved.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A settings value is out of range or malformed.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
