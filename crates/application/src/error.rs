//! Application error types

use thiserror::Error;
use hustings_domain::DomainError;

use crate::ports::{ApiError, CredentialStoreError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Credential persistence failed.
    #[error("credential storage error: {0}")]
    CredentialStore(#[from] CredentialStoreError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// The underlying API error, when this error wraps one.
    ///
    /// Views use this to distinguish credential failures (which they render
    /// inline) from everything else.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
