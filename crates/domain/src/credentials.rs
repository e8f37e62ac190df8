//! The persisted credential document.

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::user::User;

/// Current schema version for the credential document.
pub const CREDENTIAL_SCHEMA_VERSION: u32 = 1;

/// The on-disk credential document: the sole persistent state the session
/// core owns.
///
/// Token and user live in one document so a save is atomic from the
/// caller's perspective: there is no window where only one key exists.
/// No expiry is stored; validity is determined lazily by the server
/// rejecting the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Document schema version.
    pub schema_version: u32,
    /// The opaque bearer token.
    pub token: String,
    /// The serialized user profile.
    pub user: User,
}

impl CredentialRecord {
    /// Creates a record at the current schema version.
    #[must_use]
    pub const fn new(token: String, user: User) -> Self {
        Self {
            schema_version: CREDENTIAL_SCHEMA_VERSION,
            token,
            user,
        }
    }

    /// Converts the record into a live session.
    #[must_use]
    pub fn into_session(self) -> Session {
        Session::new(self.token, self.user)
    }
}

impl From<Session> for CredentialRecord {
    fn from(session: Session) -> Self {
        let (token, user) = session.into_parts();
        Self::new(token, user)
    }
}
