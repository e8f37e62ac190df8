//! Nomination endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_domain::Nomination;

use crate::http::ApiGateway;

/// Client for the `/nominations` endpoints.
#[derive(Debug, Clone)]
pub struct NominationsClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

#[derive(Serialize)]
struct PositionsPayload<'a> {
    positions: &'a [String],
}

#[derive(Deserialize)]
struct NominationEnvelope {
    nomination: Nomination,
}

#[derive(Deserialize)]
struct NominationsEnvelope {
    #[serde(default)]
    nominations: Vec<Nomination>,
}

impl<S: CredentialStore> NominationsClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Lists verified nominations (the candidate directory students browse).
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn list(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Nomination>, ApiError> {
        let envelope: NominationsEnvelope = self.gateway.get("/nominations", cancel).await?;
        Ok(envelope.nominations)
    }

    /// Fetches the caller's own nomination, or `None` before one exists.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the backend's 404 for
    /// "no nomination yet".
    pub async fn my_nomination(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Nomination>, ApiError> {
        match self
            .gateway
            .get::<NominationEnvelope>("/nominations/my-nomination", cancel)
            .await
        {
            Ok(envelope) => Ok(Some(envelope.nomination)),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Creates a draft nomination for the given positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the nomination window is closed or the call
    /// fails.
    pub async fn create(&self, positions: &[String]) -> Result<Nomination, ApiError> {
        let envelope: NominationEnvelope = self
            .gateway
            .post("/nominations", &PositionsPayload { positions }, None)
            .await?;
        Ok(envelope.nomination)
    }

    /// Updates a draft nomination's positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the nomination is locked or the call fails.
    pub async fn update(&self, id: &str, positions: &[String]) -> Result<Nomination, ApiError> {
        let envelope: NominationEnvelope = self
            .gateway
            .put(
                &format!("/nominations/{id}"),
                &PositionsPayload { positions },
                None,
            )
            .await?;
        Ok(envelope.nomination)
    }

    /// Submits a draft nomination for verification, locking it.
    ///
    /// # Errors
    ///
    /// Returns an error if the supporter quorum is not met or the call
    /// fails.
    pub async fn submit(&self, id: &str) -> Result<Nomination, ApiError> {
        let envelope: NominationEnvelope = self
            .gateway
            .post_empty(&format!("/nominations/{id}/submit"), None)
            .await?;
        Ok(envelope.nomination)
    }
}
