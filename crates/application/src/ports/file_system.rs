//! File system port
//!
//! The thin slice of filesystem access the repositories need, kept behind a
//! trait so persistence logic stays testable without touching disk layout
//! details.

use std::future::Future;
use std::path::{Path, PathBuf};

/// Errors that can occur during file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The path does not exist.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission for the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for file system access.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<u8>, FileSystemError>> + Send;

    /// Writes a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> impl Future<Output = Result<(), FileSystemError>> + Send;

    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path)
    -> impl Future<Output = Result<(), FileSystemError>> + Send;

    /// Returns true if the path exists.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path)
    -> impl Future<Output = Result<(), FileSystemError>> + Send;

    /// Renames a file, replacing any existing destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails.
    fn rename(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl Future<Output = Result<(), FileSystemError>> + Send;
}
