//! Superadmin endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_domain::{ElectionConfig, Nomination, PortalStatistics, User};

use crate::http::ApiGateway;

/// Client for the `/superadmin` endpoints.
#[derive(Debug, Clone)]
pub struct SuperadminClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

#[derive(Serialize)]
struct VerifyPayload<'a> {
    status: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAdminPayload<'a> {
    user_id: &'a str,
}

#[derive(Deserialize)]
struct ConfigEnvelope {
    config: ElectionConfig,
}

#[derive(Deserialize)]
struct NominationsEnvelope {
    #[serde(default)]
    nominations: Vec<Nomination>,
}

/// The backend answers with `{ data, statistics }`; the explicit key wins
/// when both are present.
#[derive(Deserialize)]
struct StatisticsEnvelope {
    #[serde(default)]
    statistics: Option<PortalStatistics>,
    #[serde(default)]
    data: Option<PortalStatistics>,
}

impl StatisticsEnvelope {
    fn into_statistics(self) -> PortalStatistics {
        self.statistics.or(self.data).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    data: Vec<User>,
}

impl<S: CredentialStore> SuperadminClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Fetches the election configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn config(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<ElectionConfig, ApiError> {
        let envelope: ConfigEnvelope = self.gateway.get("/superadmin/config", cancel).await?;
        Ok(envelope.config)
    }

    /// Saves one configuration section (deadlines, reviewer credentials,
    /// phase) and returns the updated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn update_config(
        &self,
        section: &str,
        config: &ElectionConfig,
    ) -> Result<ElectionConfig, ApiError> {
        let envelope: ConfigEnvelope = self
            .gateway
            .put(&format!("/superadmin/config/{section}"), config, None)
            .await?;
        Ok(envelope.config)
    }

    /// Lists all nominations for verification.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn nominations(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Nomination>, ApiError> {
        let envelope: NominationsEnvelope =
            self.gateway.get("/superadmin/nominations", cancel).await?;
        Ok(envelope.nominations)
    }

    /// Sets a submitted nomination's verification outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn verify_nomination(&self, id: &str, status: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .gateway
            .put(
                &format!("/superadmin/nominations/{id}/verify"),
                &VerifyPayload { status },
                None,
            )
            .await?;
        Ok(())
    }

    /// Fetches portal-wide statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn statistics(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<PortalStatistics, ApiError> {
        let envelope: StatisticsEnvelope =
            self.gateway.get("/superadmin/statistics", cancel).await?;
        Ok(envelope.into_statistics())
    }

    /// Lists all portal users.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn users(&self, cancel: Option<&CancellationToken>) -> Result<Vec<User>, ApiError> {
        let envelope: UsersEnvelope = self.gateway.get("/superadmin/users", cancel).await?;
        Ok(envelope.data)
    }

    /// Grants the superadmin role to an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn create_admin(&self, user_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .gateway
            .post("/superadmin/create-admin", &CreateAdminPayload { user_id }, None)
            .await?;
        Ok(())
    }

    /// Downloads a CSV export ("users", "nominations", "supporters").
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn export(
        &self,
        kind: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, ApiError> {
        self.gateway
            .get_bytes(&format!("/superadmin/export/{kind}"), cancel)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_admin_payload_shape() {
        let value = serde_json::to_value(CreateAdminPayload { user_id: "u9" }).unwrap();
        assert_eq!(value["userId"], "u9");
    }

    #[test]
    fn test_statistics_envelope_accepts_either_key() {
        let named: StatisticsEnvelope = serde_json::from_str(
            r#"{"statistics": {"users": {"total": 3}}}"#,
        )
        .unwrap();
        assert_eq!(named.into_statistics().users.total, 3);

        let generic: StatisticsEnvelope =
            serde_json::from_str(r#"{"data": {"users": {"total": 5}}}"#).unwrap();
        assert_eq!(generic.into_statistics().users.total, 5);

        let both: StatisticsEnvelope = serde_json::from_str(
            r#"{"data": {"users": {"total": 1}}, "statistics": {"users": {"total": 2}}}"#,
        )
        .unwrap();
        assert_eq!(both.into_statistics().users.total, 2);
    }

    #[test]
    fn test_config_round_trips_unmodeled_keys() {
        let body = r#"{"config": {"phase": "phase2", "nominationEnd": "2026-03-01T12:00:00Z"}}"#;
        let envelope: ConfigEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.config.phase.as_deref(), Some("phase2"));
        assert!(envelope.config.extra.contains_key("nominationEnd"));
    }
}
