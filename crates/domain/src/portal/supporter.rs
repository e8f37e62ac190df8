//! Supporter endorsement requests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// The role a supporter is asked to fill on a nomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupporterRole {
    /// First endorser.
    Proposer,
    /// Second endorser.
    Seconder,
    /// Campaign team member.
    Campaigner,
}

impl SupporterRole {
    /// The wire name for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposer => "proposer",
            Self::Seconder => "seconder",
            Self::Campaigner => "campaigner",
        }
    }
}

impl std::fmt::Display for SupporterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supporter request, from either side of the exchange: candidates see
/// the requesting `student`, students see the requested `candidate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupporterRequest {
    /// Backend-assigned identifier.
    pub id: String,
    /// Requested supporter role.
    pub role: SupporterRole,
    /// Lifecycle status: "pending", "accepted", "rejected".
    pub status: String,
    /// The candidate being supported, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<User>,
    /// The student offering support, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<User>,
    /// Creation timestamp, when the endpoint supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SupporterRequest {
    /// True while neither side has resolved the request.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&SupporterRole::Proposer).unwrap(),
            "\"proposer\""
        );
        let role: SupporterRole = serde_json::from_str("\"campaigner\"").unwrap();
        assert_eq!(role, SupporterRole::Campaigner);
    }

    #[test]
    fn test_request_deserializes_either_side() {
        let from_student_view: SupporterRequest = serde_json::from_str(
            r#"{"id": "s1", "role": "seconder", "status": "pending",
                "candidate": {"id": "u2", "name": "Grace"}}"#,
        )
        .unwrap();
        assert!(from_student_view.is_pending());
        assert!(from_student_view.candidate.is_some());
        assert!(from_student_view.student.is_none());
    }
}
