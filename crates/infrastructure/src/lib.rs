//! Hustings Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: file-backed persistence, the reqwest API
//! gateway, and the typed endpoint clients.

pub mod api;
pub mod http;
pub mod persistence;
pub mod serialization;

pub use api::{
    AuthClient, ManifestosClient, NominationsClient, ReviewersClient, SuperadminClient,
    SupportersClient,
};
pub use http::ApiGateway;
pub use persistence::{FileCredentialStore, FileSettingsRepository, TokioFileSystem};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
