//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod cancellation;
mod credential_store;
mod file_system;
mod portal_api;

pub use cancellation::CancellationToken;
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use file_system::{FileSystem, FileSystemError};
pub use portal_api::{ApiError, AuthApi};
