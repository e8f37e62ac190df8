//! File-based persistence adapters.

mod credential_repository;
mod file_system;
mod settings_repository;

pub use credential_repository::FileCredentialStore;
pub use file_system::TokioFileSystem;
pub use settings_repository::{
    ENV_API_BASE_URL, ENV_REQUEST_TIMEOUT_MS, ENV_REVALIDATE_ON_START, FileSettingsRepository,
};
