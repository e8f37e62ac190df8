//! Credential store port
//!
//! Defines the interface for persisting the session token and user profile
//! across process restarts.

use async_trait::async_trait;
use hustings_domain::Session;

/// Errors that can occur during credential store operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for credential persistence.
///
/// The store holds at most one credential pair. Token and user are written
/// as a single document, so a save is atomic from the caller's perspective:
/// there is no observable state with only one of them present.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persists the session, replacing any previous credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials cannot be written.
    async fn save(&self, session: &Session) -> Result<(), CredentialStoreError>;

    /// Loads the persisted session, if any.
    ///
    /// Malformed stored data is treated as an absent session, not an error:
    /// a corrupt document must degrade to "logged out", never to a crash.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures other than absence.
    async fn load(&self) -> Result<Option<Session>, CredentialStoreError>;

    /// Removes the persisted credentials. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails for a reason other than absence.
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
