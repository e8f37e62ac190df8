//! Superadmin configuration and statistics records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Election configuration managed from the superadmin deadline screen.
///
/// Deadline fields are kept in `extra` as raw values. The set of deadline
/// keys (`nominationStart`, `manifestoPhase1End`, ...) is backend-owned and
/// has grown release over release, so the client does not enumerate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElectionConfig {
    /// Currently active election phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Remaining configuration: deadlines and per-phase reviewer
    /// credentials.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One counted category on the statistics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsBucket {
    /// Total records in the category.
    #[serde(default)]
    pub total: u64,
    /// Per-status breakdown ("pending", "accepted", "candidates", ...).
    #[serde(flatten)]
    pub breakdown: BTreeMap<String, u64>,
}

/// Portal-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortalStatistics {
    /// User counts.
    #[serde(default)]
    pub users: StatisticsBucket,
    /// Nomination counts.
    #[serde(default)]
    pub nominations: StatisticsBucket,
    /// Supporter-request counts.
    #[serde(default)]
    pub supporters: StatisticsBucket,
    /// Manifesto upload counts.
    #[serde(default)]
    pub manifestos: StatisticsBucket,
}
