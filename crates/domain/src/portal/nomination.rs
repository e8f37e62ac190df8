//! Candidacy nomination records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A candidacy nomination.
///
/// `status` is a backend-owned string; the client treats it as opaque apart
/// from a handful of display predicates. The backend has historically been
/// inconsistent about casing ("ACCEPTED" next to "rejected"), so predicates
/// compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    /// Backend-assigned identifier.
    pub id: String,
    /// Contested positions, in preference order.
    #[serde(default)]
    pub positions: Vec<String>,
    /// Lifecycle status: "draft", "submitted", "verified", "rejected", ...
    pub status: String,
    /// The nominating candidate, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<User>,
    /// Accepted proposer count.
    #[serde(default)]
    pub proposer_count: u32,
    /// Accepted seconder count.
    #[serde(default)]
    pub seconder_count: u32,
    /// Accepted campaigner count.
    #[serde(default)]
    pub campaigner_count: u32,
    /// Creation timestamp, when the endpoint supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Nomination {
    /// True once the nomination has left the draft state; locked
    /// nominations reject further edits.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        ["submitted", "locked", "verified", "rejected"]
            .iter()
            .any(|s| self.status.eq_ignore_ascii_case(s))
    }

    /// True when the nomination has been verified by an administrator.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status.eq_ignore_ascii_case("verified")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_statuses() {
        let mut nomination: Nomination = serde_json::from_str(
            r#"{"id": "n1", "positions": ["President"], "status": "draft"}"#,
        )
        .unwrap();
        assert!(!nomination.is_locked());

        for status in ["submitted", "VERIFIED", "rejected", "locked"] {
            nomination.status = status.to_string();
            assert!(nomination.is_locked(), "{status} should lock");
        }
    }

    #[test]
    fn test_supporter_counts_default_to_zero() {
        let nomination: Nomination =
            serde_json::from_str(r#"{"id": "n1", "status": "draft"}"#).unwrap();
        assert_eq!(nomination.proposer_count, 0);
        assert_eq!(nomination.positions, Vec::<String>::new());
    }
}
