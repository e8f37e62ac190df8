//! Real file system implementation.

use std::path::Path;

use tokio::fs;

use hustings_application::ports::{FileSystem, FileSystemError};

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileSystemError::NotFound(path.to_path_buf())
            } else if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, contents).await.map_err(FileSystemError::Io)
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path).await.map_err(FileSystemError::Io)
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_file(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileSystemError::NotFound(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        fs::rename(from, to).await.map_err(FileSystemError::Io)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("file.json");

        let fs = TokioFileSystem::new();
        fs.write_file(&path, b"{}").await.unwrap();

        assert!(fs.exists(&path).await);
        assert_eq!(fs.read_file(&path).await.unwrap(), b"{}");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempdir().expect("temp dir");
        let fs = TokioFileSystem::new();

        let err = fs.read_file(&dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, FileSystemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_replaces_destination() {
        let dir = tempdir().expect("temp dir");
        let from = dir.path().join("a.json");
        let to = dir.path().join("b.json");

        let fs = TokioFileSystem::new();
        fs.write_file(&from, b"new").await.unwrap();
        fs.write_file(&to, b"old").await.unwrap();
        fs.rename(&from, &to).await.unwrap();

        assert_eq!(fs.read_file(&to).await.unwrap(), b"new");
        assert!(!fs.exists(&from).await);
    }
}
