//! Portal roles and role classification.
//!
//! Role strings arrive from the backend in whatever casing the upstream
//! store produced. Classification is therefore case-insensitive, and any
//! unrecognized string falls back to `Student`, the portal's only defined
//! behavior for unknown roles.

use serde::{Deserialize, Serialize};

/// The portal roles, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Registered student; the default landing role.
    #[default]
    Student,
    /// Student with a filed candidacy nomination.
    Candidate,
    /// Manifesto reviewer, provisioned per election phase.
    Reviewer,
    /// Portal administrator.
    Superadmin,
}

impl Role {
    /// Classifies a wire role string, case-insensitively.
    ///
    /// Unknown or absent strings classify as `Student`.
    #[must_use]
    pub fn classify(role: Option<&str>) -> Self {
        match role.map(str::to_ascii_lowercase).as_deref() {
            Some("superadmin") => Self::Superadmin,
            Some("candidate") => Self::Candidate,
            Some("reviewer") => Self::Reviewer,
            _ => Self::Student,
        }
    }

    /// The canonical lowercase wire name for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Candidate => "candidate",
            Self::Reviewer => "reviewer",
            Self::Superadmin => "superadmin",
        }
    }

    /// Returns true if `role` names this role, compared case-insensitively
    /// against the canonical wire name.
    #[must_use]
    pub fn is_named_by(self, role: Option<&str>) -> bool {
        role.is_some_and(|r| r.eq_ignore_ascii_case(self.as_str()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
