//! Authentication endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use hustings_application::ports::{ApiError, AuthApi, CredentialStore};
use hustings_domain::{Session, User};

use crate::http::ApiGateway;

/// Client for the `/auth` and `/reviewers/login` endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

/// Profile fields collected by the registration form.
///
/// The backend's registration contract grows with the form; fields beyond
/// the name travel in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetails {
    /// Display name.
    pub name: String,
    /// Password for the new account.
    pub password: String,
    /// Remaining form fields (roll number, department, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ReviewerLoginPayload<'a> {
    username: &'a str,
    password: &'a str,
    phase: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterWithTokenPayload<'a> {
    id_token: &'a str,
    email: &'a str,
    #[serde(flatten)]
    details: &'a RegistrationDetails,
}

#[derive(Serialize)]
struct ForgotPasswordPayload<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordPayload<'a> {
    email: &'a str,
    otp: &'a str,
    new_password: &'a str,
}

#[derive(Deserialize)]
struct AuthEnvelope {
    token: String,
    user: User,
}

#[derive(Deserialize)]
struct ReviewerAuthEnvelope {
    token: String,
    reviewer: User,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl<S: CredentialStore> AuthClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Finalizes an email-link registration.
    ///
    /// `id_token` is the short-lived verification token minted by the
    /// identity provider; the backend consumes it once. Returns the fresh
    /// session for the caller to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is spent or the form is rejected.
    pub async fn register_with_token(
        &self,
        id_token: &str,
        email: &str,
        details: &RegistrationDetails,
    ) -> Result<Session, ApiError> {
        let payload = RegisterWithTokenPayload {
            id_token,
            email,
            details,
        };
        let envelope: AuthEnvelope = self
            .gateway
            .post("/auth/register-with-token", &payload, None)
            .await?;
        Ok(Session::new(envelope.token, envelope.user))
    }

    /// Requests a password-reset OTP for `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .gateway
            .post("/auth/forgot-password", &ForgotPasswordPayload { email }, None)
            .await?;
        Ok(())
    }

    /// Resets the password using a previously issued OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the OTP is invalid or expired.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let payload = ResetPasswordPayload {
            email,
            otp,
            new_password,
        };
        let _: serde_json::Value = self
            .gateway
            .post("/auth/reset-password", &payload, None)
            .await?;
        Ok(())
    }

    /// Promotes the current user to candidate.
    ///
    /// Returns the updated user record; callers feed it to the session
    /// service's `update_user` so the promotion takes effect without
    /// re-authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the nomination window is closed or the call
    /// fails.
    pub async fn become_candidate(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .gateway
            .post_empty("/auth/become-candidate", None)
            .await?;
        Ok(envelope.user)
    }
}

#[async_trait]
impl<S: CredentialStore> AuthApi for AuthClient<S> {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let envelope: AuthEnvelope = self
            .gateway
            .post("/auth/login", &LoginPayload { email, password }, None)
            .await?;
        Ok(Session::new(envelope.token, envelope.user))
    }

    async fn reviewer_login(
        &self,
        username: &str,
        password: &str,
        phase: &str,
    ) -> Result<Session, ApiError> {
        let payload = ReviewerLoginPayload {
            username,
            password,
            phase,
        };
        let envelope: ReviewerAuthEnvelope = self
            .gateway
            .post("/reviewers/login", &payload, None)
            .await?;
        Ok(Session::new(envelope.token, envelope.reviewer))
    }

    async fn profile(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.gateway.get("/auth/profile", None).await?;
        Ok(envelope.user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_payload_flattens_details() {
        let mut details = RegistrationDetails {
            name: "Ada".to_string(),
            password: "pw".to_string(),
            ..RegistrationDetails::default()
        };
        details
            .extra
            .insert("rollNo".to_string(), serde_json::json!("EE-104"));

        let payload = RegisterWithTokenPayload {
            id_token: "verify-123",
            email: "ada@campus.edu",
            details: &details,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["idToken"], "verify-123");
        assert_eq!(value["email"], "ada@campus.edu");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["rollNo"], "EE-104");
    }

    #[test]
    fn test_reviewer_envelope_shape() {
        let envelope: ReviewerAuthEnvelope = serde_json::from_str(
            r#"{"token": "tok-r", "reviewer": {"id": "r1", "name": "Panel A"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.token, "tok-r");
        // The backend sends no role for reviewer principals.
        assert!(envelope.reviewer.role.is_none());
    }
}
