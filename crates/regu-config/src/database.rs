//! libSQL database configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Remote database URL (e.g., `libsql://regunova-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database auth token for remote access.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file path. Used when no remote URL is configured;
    /// empty means the default data-dir location.
    #[serde(default)]
    pub local_path: String,
}

impl DatabaseConfig {
    /// Check if the config has the minimum required fields for remote access.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check if an explicit local database path is set.
    pub fn has_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }
}
