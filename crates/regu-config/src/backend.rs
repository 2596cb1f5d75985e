//! Remote backend (auth + functions) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend base URL (e.g., `https://acme.regunova.app`).
    #[serde(default)]
    pub url: String,

    /// Client API key sent with unauthenticated requests (sign-in, sign-up).
    #[serde(default)]
    pub api_key: String,
}

impl BackendConfig {
    /// Check if the backend config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// Base URL with any trailing slash removed, for joining endpoint paths.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = BackendConfig {
            url: "https://acme.regunova.app/".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "https://acme.regunova.app");
    }
}
