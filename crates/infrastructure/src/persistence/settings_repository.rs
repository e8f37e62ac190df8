//! File-based settings repository.
//!
//! Settings load from `settings.json` under the client's config directory,
//! then `HUSTINGS_*` environment variables are applied on top. A missing
//! or malformed file yields defaults; settings are never a startup
//! blocker.

use std::path::{Path, PathBuf};

use tracing::warn;

use hustings_application::ports::{FileSystem, FileSystemError};
use hustings_domain::ClientSettings;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE_URL: &str = "HUSTINGS_API_BASE_URL";
/// Environment variable overriding the request timeout (milliseconds).
pub const ENV_REQUEST_TIMEOUT_MS: &str = "HUSTINGS_REQUEST_TIMEOUT_MS";
/// Environment variable enabling eager session revalidation.
pub const ENV_REVALIDATE_ON_START: &str = "HUSTINGS_REVALIDATE_ON_START";

/// File-based settings repository.
#[derive(Debug, Clone)]
pub struct FileSettingsRepository<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileSettingsRepository<F> {
    /// Creates a settings repository reading from `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Creates a repository at the default location under the user's
    /// config directory.
    pub fn at_default_location(fs: F) -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(fs, base.join("hustings").join("settings.json"))
    }

    /// The path of the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, with process environment overrides applied.
    pub async fn load(&self) -> ClientSettings {
        let settings = self.load_file().await;
        apply_env_overrides(settings, std::env::vars())
    }

    /// Persists settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), FileSystemError> {
        let content = to_json_stable_bytes(settings)
            .map_err(|e| FileSystemError::Io(std::io::Error::other(e.to_string())))?;
        self.fs.write_file(&self.path, &content).await
    }

    async fn load_file(&self) -> ClientSettings {
        if !self.fs.exists(&self.path).await {
            return ClientSettings::default();
        }

        match self.fs.read_file(&self.path).await {
            Ok(content) => from_json_bytes(&content).unwrap_or_else(|err| {
                warn!(error = %err, path = %self.path.display(), "malformed settings file, using defaults");
                ClientSettings::default()
            }),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "could not read settings, using defaults");
                ClientSettings::default()
            }
        }
    }
}

/// Applies `HUSTINGS_*` variables from `vars` on top of `settings`.
///
/// Unparseable values are ignored with a diagnostic rather than clobbering
/// the file-configured value.
fn apply_env_overrides(
    mut settings: ClientSettings,
    vars: impl Iterator<Item = (String, String)>,
) -> ClientSettings {
    for (key, value) in vars {
        match key.as_str() {
            ENV_API_BASE_URL => settings.api_base_url = value,
            ENV_REQUEST_TIMEOUT_MS => match value.parse() {
                Ok(timeout) => settings.request_timeout_ms = timeout,
                Err(_) => warn!(value, "ignoring unparseable {ENV_REQUEST_TIMEOUT_MS}"),
            },
            ENV_REVALIDATE_ON_START => {
                settings.revalidate_on_start =
                    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
            }
            _ => {}
        }
    }
    settings
}
