//! Auth endpoint port and API error taxonomy.

use async_trait::async_trait;
use hustings_domain::{Session, User};

/// Errors surfaced by backend calls.
///
/// `Unauthorized` is produced only by the gateway's 401 interception on
/// non-login endpoints, after it has cleared the credential store and
/// emitted the unauthorized event. A 401 from a login endpoint arrives as
/// `Status { status: 401, .. }` untouched, so a failed login can never
/// trigger the global forced-logout path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Authorization rejected centrally; the session has been torn down.
    #[error("authorization rejected")]
    Unauthorized,

    /// Non-success status passed through to the caller.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },

    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The request was cancelled before completion.
    #[error("request cancelled")]
    Cancelled,

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// A message suitable for direct display, preferring the backend's own
    /// error message and falling back to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The HTTP status, for errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Port for the authentication endpoints the session service calls.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges student credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns the backend's error untouched; a 401 here is a credential
    /// failure, not a session teardown.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// Exchanges reviewer credentials for a session.
    ///
    /// The returned principal carries no role; the session service stamps
    /// one before persisting.
    ///
    /// # Errors
    ///
    /// Returns the backend's error untouched.
    async fn reviewer_login(
        &self,
        username: &str,
        password: &str,
        phase: &str,
    ) -> Result<Session, ApiError>;

    /// Fetches the authenticated user's profile ("who am I").
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the call fails.
    async fn profile(&self) -> Result<User, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_body() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_user_message_fallback() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).user_message("Login failed"),
            "Login failed"
        );
        assert_eq!(
            ApiError::Status {
                status: 500,
                message: None
            }
            .user_message("Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Cancelled.status(), None);
    }
}
