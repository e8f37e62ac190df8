//! Client settings.

use serde::{Deserialize, Serialize};

/// Default backend API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://nomination-portal-backend.onrender.com/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// User-configurable client settings.
///
/// Loaded from `settings.json` in the config directory; every field has a
/// default so a missing or partial file is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the portal backend, including the `/api` prefix.
    pub api_base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// When true, startup hydration additionally calls the profile endpoint
    /// to refresh the cached user. Off by default: the cached session is
    /// trusted on read for responsiveness, accepting a staleness window
    /// until the first 401.
    pub revalidate_on_start: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            revalidate_on_start: false,
        }
    }
}
