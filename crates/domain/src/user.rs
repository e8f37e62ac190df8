//! Portal user records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A portal user as returned by the backend.
///
/// Only the fields the client dispatches on are modeled; everything else the
/// backend sends (roll number, department, phase assignments, ...) is carried
/// through `extra` so a save/load or an `update_user` round trip never drops
/// data this client does not understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email, absent for reviewer principals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Wire role string; classification happens at dispatch time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl User {
    /// Creates a user with the given id and no other fields set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            role: None,
            extra: BTreeMap::new(),
        }
    }

    /// Builder-style name assignment.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style role assignment.
    ///
    /// Used by the reviewer login flow to stamp the synthetic `reviewer`
    /// role the backend does not supply.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// The classified role for dispatch. Unknown or absent roles classify
    /// as [`Role::Student`].
    #[must_use]
    pub fn role_kind(&self) -> Role {
        Role::classify(self.role.as_deref())
    }
}
