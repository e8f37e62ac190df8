//! Supporter-request endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_domain::{SupporterRequest, SupporterRole};

use crate::http::ApiGateway;

/// Client for the `/supporters` endpoints.
#[derive(Debug, Clone)]
pub struct SupportersClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportPayload<'a> {
    candidate_id: &'a str,
    role: SupporterRole,
}

/// The backend answers with `{ data, requests }`; the explicit key wins
/// when both are present.
#[derive(Deserialize)]
struct RequestsEnvelope {
    #[serde(default)]
    requests: Option<Vec<SupporterRequest>>,
    #[serde(default)]
    data: Option<Vec<SupporterRequest>>,
}

impl RequestsEnvelope {
    fn into_requests(self) -> Vec<SupporterRequest> {
        self.requests.or(self.data).unwrap_or_default()
    }
}

impl<S: CredentialStore> SupportersClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Offers to support a candidate in the given role.
    ///
    /// # Errors
    ///
    /// Returns an error if a request already exists or the call fails.
    pub async fn request_support(
        &self,
        candidate_id: &str,
        role: SupporterRole,
    ) -> Result<(), ApiError> {
        let payload = SupportPayload { candidate_id, role };
        let _: serde_json::Value = self
            .gateway
            .post("/supporters/request", &payload, None)
            .await?;
        Ok(())
    }

    /// Lists the caller's outgoing supporter requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn my_requests(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<SupporterRequest>, ApiError> {
        let envelope: RequestsEnvelope =
            self.gateway.get("/supporters/my-requests", cancel).await?;
        Ok(envelope.into_requests())
    }

    /// Lists the incoming supporter requests for a candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn for_candidate(
        &self,
        candidate_user_id: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<SupporterRequest>, ApiError> {
        let envelope: RequestsEnvelope = self
            .gateway
            .get(&format!("/supporters/candidate/{candidate_user_id}"), cancel)
            .await?;
        Ok(envelope.into_requests())
    }

    /// Accepts a pending supporter request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is not pending or the call fails.
    pub async fn accept(&self, request_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .gateway
            .put_empty(&format!("/supporters/{request_id}/accept"), None)
            .await?;
        Ok(())
    }

    /// Rejects a pending supporter request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is not pending or the call fails.
    pub async fn reject(&self, request_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .gateway
            .put_empty(&format!("/supporters/{request_id}/reject"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_support_payload_shape() {
        let value = serde_json::to_value(SupportPayload {
            candidate_id: "u7",
            role: SupporterRole::Seconder,
        })
        .unwrap();
        assert_eq!(value["candidateId"], "u7");
        assert_eq!(value["role"], "seconder");
    }

    #[test]
    fn test_requests_envelope_accepts_either_key() {
        let body = r#"{"requests": [{"id": "s1", "role": "proposer", "status": "pending"}]}"#;
        let envelope: RequestsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_requests().len(), 1);

        let generic: RequestsEnvelope = serde_json::from_str(
            r#"{"data": [{"id": "s1", "role": "proposer", "status": "accepted"}]}"#,
        )
        .unwrap();
        assert!(!generic.into_requests()[0].is_pending());
    }

    #[test]
    fn test_requests_envelope_prefers_explicit_key() {
        // The backend sends both keys on some deployments.
        let body = r#"{
            "data": [],
            "requests": [{"id": "s1", "role": "campaigner", "status": "pending"}]
        }"#;
        let envelope: RequestsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_requests().len(), 1);
    }
}
