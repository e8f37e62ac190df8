//! File-based credential store implementation.
//!
//! Credentials are stored in `credentials.json` under the client's config
//! directory. Token and user live in one document, and writes go through a
//! temp-file-and-rename, so a reader never observes a torn record.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use hustings_application::ports::{
    CredentialStore, CredentialStoreError, FileSystem, FileSystemError,
};
use hustings_domain::{CredentialRecord, Session};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Converts `FileSystemError` to `std::io::Error` for `CredentialStoreError`.
fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

/// File-based credential store.
///
/// Stores the credential document at the given path:
/// ```json
/// {
///   "schema_version": 1,
///   "token": "eyJhbGciOi...",
///   "user": { "id": "u1", "name": "Ada", "role": "student" }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileCredentialStore<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileCredentialStore<F> {
    /// Creates a credential store writing to `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Creates a store at the default location under the user's config
    /// directory, or relative to the working directory when none exists.
    pub fn at_default_location(fs: F) -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(fs, base.join("hustings").join("credentials.json"))
    }

    /// The path of the credential document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "credentials.json".into(), ToOwned::to_owned);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<F: FileSystem + Sync> CredentialStore for FileCredentialStore<F> {
    async fn save(&self, session: &Session) -> Result<(), CredentialStoreError> {
        let record = CredentialRecord::from(session.clone());
        let content = to_json_stable_bytes(&record)
            .map_err(|e| CredentialStoreError::Serialization(e.to_string()))?;

        // Write to a sibling temp file and rename into place so a crashed
        // write cannot leave a half-written document behind.
        let staging = self.staging_path();
        self.fs
            .write_file(&staging, &content)
            .await
            .map_err(|e| CredentialStoreError::Io(to_io_error(e)))?;
        self.fs
            .rename(&staging, &self.path)
            .await
            .map_err(|e| CredentialStoreError::Io(to_io_error(e)))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, CredentialStoreError> {
        if !self.fs.exists(&self.path).await {
            return Ok(None);
        }

        let content = self
            .fs
            .read_file(&self.path)
            .await
            .map_err(|e| CredentialStoreError::Io(to_io_error(e)))?;

        // Malformed stored data degrades to a logged-out session.
        match from_json_bytes::<CredentialRecord>(&content) {
            Ok(record) => Ok(Some(record.into_session())),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "discarding malformed credential document");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match self.fs.remove_file(&self.path).await {
            Ok(()) | Err(FileSystemError::NotFound(_)) => Ok(()),
            Err(e) => Err(CredentialStoreError::Io(to_io_error(e))),
        }
    }
}
