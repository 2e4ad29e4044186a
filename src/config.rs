//! Client configuration with env-overridable defaults.

use keyring::Entry;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5050";
pub const DEFAULT_API_ROOT: &str = "/api/knowledge";

const KEYRING_SERVICE: &str = "kb-admin";
const KEYRING_USER: &str = "admin-token";

/// Connection settings for [`crate::transport::HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend (any path here is kept and prefixed).
    pub base_url: String,
    /// Mount point of the knowledge admin router.
    pub api_root: String,
    /// Bearer token for admin endpoints.
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout_secs: u64,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            token: None,
            timeout_secs: 30,
            pool_max_idle_per_host: 32,
            pool_idle_timeout_secs: 90,
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Load settings from `KB_ADMIN_*` environment variables.
    ///
    /// When `KB_ADMIN_TOKEN` is unset, the OS keyring entry
    /// `kb-admin/admin-token` is consulted.
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        if config.token.is_none() {
            config.token = Self::keyring_token();
        }
        config
    }

    /// Build a config from an arbitrary key lookup. Unparseable numbers keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("KB_ADMIN_BASE_URL").unwrap_or(defaults.base_url),
            api_root: non_empty("KB_ADMIN_API_ROOT").unwrap_or(defaults.api_root),
            token: non_empty("KB_ADMIN_TOKEN"),
            timeout_secs: non_empty("KB_ADMIN_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_secs),
            pool_max_idle_per_host: non_empty("KB_ADMIN_POOL_MAX_IDLE_PER_HOST")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
            pool_idle_timeout_secs: non_empty("KB_ADMIN_POOL_IDLE_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.pool_idle_timeout_secs),
            proxy_url: non_empty("KB_ADMIN_PROXY_URL"),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }

    fn keyring_token() -> Option<String> {
        Entry::new(KEYRING_SERVICE, KEYRING_USER)
            .ok()
            .and_then(|entry| entry.get_password().ok())
    }
}
