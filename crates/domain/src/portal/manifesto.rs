//! Manifesto and review records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// An uploaded manifesto PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifesto {
    /// Backend-assigned identifier.
    pub id: String,
    /// Election phase the upload belongs to ("phase1", "phase2", "final").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Review status: "pending", "reviewed", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Original upload file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Backend storage URL for the PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Owning nomination, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nomination: Option<serde_json::Value>,
    /// Uploading candidate, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<User>,
    /// Upload timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A reviewer's comment on a manifesto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerComment {
    /// Backend-assigned identifier.
    pub id: String,
    /// Manifesto the comment belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifesto_id: Option<String>,
    /// Comment body.
    pub comment: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_manifesto_minimal_shape() {
        let manifesto: Manifesto = serde_json::from_str(
            r#"{"id": "m1", "phase": "phase1", "fileName": "platform.pdf"}"#,
        )
        .unwrap();
        assert_eq!(manifesto.file_name.as_deref(), Some("platform.pdf"));
        assert!(manifesto.status.is_none());
    }

    #[test]
    fn test_comment_round_trip() {
        let comment: ReviewerComment = serde_json::from_str(
            r#"{"id": "c1", "manifestoId": "m1", "comment": "Cite your budget numbers."}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["manifestoId"], "m1");
    }
}
