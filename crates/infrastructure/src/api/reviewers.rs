//! Reviewer resource endpoints.
//!
//! Reviewer login itself lives on [`AuthClient`](super::AuthClient); this
//! client covers the manifesto queue and comment thread a logged-in
//! reviewer works with.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_domain::{Manifesto, ReviewerComment};

use crate::http::ApiGateway;

/// Client for the `/reviewers` resource endpoints.
#[derive(Debug, Clone)]
pub struct ReviewersClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentPayload<'a> {
    manifesto_id: &'a str,
    comment: &'a str,
}

/// The backend answers with `{ data, manifestos }`; the explicit key wins
/// when both are present.
#[derive(Deserialize)]
struct ManifestosEnvelope {
    #[serde(default)]
    manifestos: Option<Vec<Manifesto>>,
    #[serde(default)]
    data: Option<Vec<Manifesto>>,
}

impl ManifestosEnvelope {
    fn into_manifestos(self) -> Vec<Manifesto> {
        self.manifestos.or(self.data).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct CommentsEnvelope {
    #[serde(default)]
    comments: Vec<ReviewerComment>,
}

/// `{ comment }` or `{ data }`, depending on the deployment.
#[derive(Deserialize)]
struct CommentEnvelope {
    #[serde(default)]
    comment: Option<ReviewerComment>,
    #[serde(default)]
    data: Option<ReviewerComment>,
}

impl CommentEnvelope {
    fn into_comment(self) -> Option<ReviewerComment> {
        self.comment.or(self.data)
    }
}

impl<S: CredentialStore> ReviewersClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Lists the manifestos assigned to the reviewer's phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn manifestos(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Manifesto>, ApiError> {
        let envelope: ManifestosEnvelope =
            self.gateway.get("/reviewers/manifestos", cancel).await?;
        Ok(envelope.into_manifestos())
    }

    /// Lists the comment thread on a manifesto.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn comments(
        &self,
        manifesto_id: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<ReviewerComment>, ApiError> {
        let envelope: CommentsEnvelope = self
            .gateway
            .get(&format!("/reviewers/comments/{manifesto_id}"), cancel)
            .await?;
        Ok(envelope.comments)
    }

    /// Adds a comment to a manifesto.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn add_comment(
        &self,
        manifesto_id: &str,
        comment: &str,
    ) -> Result<ReviewerComment, ApiError> {
        let payload = CommentPayload {
            manifesto_id,
            comment,
        };
        let envelope: CommentEnvelope = self
            .gateway
            .post("/reviewers/comments", &payload, None)
            .await?;
        envelope
            .into_comment()
            .ok_or_else(|| ApiError::Decode("comment missing from response".to_string()))
    }
}
