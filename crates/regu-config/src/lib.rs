//! # regu-config
//!
//! Figment-layered configuration for ReguNova.
//!
//! Four sources merge into one [`ReguConfig`], later entries overriding
//! earlier ones:
//! 1. Built-in defaults
//! 2. User-level `~/.config/regunova/config.toml`
//! 3. Project-level `.regunova/config.toml`
//! 4. Environment variables (`REGUNOVA_` prefix, `__` between sections)
//!
//! So `REGUNOVA_BACKEND__URL` lands on `backend.url` and beats both TOML
//! files, while a built-in default survives only when nothing else names
//! the key.
//!
//! ```no_run
//! use regu_config::ReguConfig;
//!
//! // The CLI entry point, which also pulls a workspace `.env` first:
//! let config = ReguConfig::load_with_dotenv().expect("config");
//!
//! // Plain load when the environment is already prepared:
//! let config = ReguConfig::load().expect("config");
//!
//! if config.database.is_configured() {
//!     println!("syncing to {}", config.database.url);
//! }
//! ```

mod ai;
mod backend;
mod billing;
mod database;
mod error;
mod general;
mod theme;

pub use ai::AiConfig;
pub use backend::BackendConfig;
pub use billing::BillingConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use theme::{ThemeConfig, save_theme, save_theme_to};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReguConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub billing: BillingConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl ReguConfig {
    /// Extract a config from the TOML files and the process environment.
    ///
    /// `.env` files are ignored here; [`Self::load_with_dotenv`] reads them
    /// first when that is wanted.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Like [`Self::load`], but seeds the process environment from a
    /// workspace `.env` file before extracting. The CLI starts here.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// The provider chain behind [`Self::load`], exposed so tests can
    /// extract from it directly or stack more providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // user-global file, when present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // project-local file shadows it
        let local_path = PathBuf::from(".regunova/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // environment wins over everything
        figment = figment.merge(Env::prefixed("REGUNOVA_").split("__"));

        figment
    }

    /// Find and apply a `.env` file, starting at `CARGO_MANIFEST_DIR` and
    /// climbing toward the workspace root. Absent files are not an error;
    /// the current directory is the last resort.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate dir, then crates/, then the workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

/// Path to the user-global config file. Also the theme persistence target.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("regunova").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_every_section_unconfigured() {
        let config = ReguConfig::default();
        assert!(!config.backend.is_configured());
        assert!(!config.database.is_configured());
        assert!(!config.theme.dark);
    }

    #[test]
    fn extraction_succeeds_with_no_files_present() {
        let figment = ReguConfig::figment();
        let config: ReguConfig = figment.extract().expect("should extract defaults");
        assert!(!config.backend.is_configured());
        assert_eq!(config.billing.price_id, "price_monthly_subscription");
        assert_eq!(config.general.report_delay_secs, 3);
        assert_eq!(config.general.default_limit, 20);
    }
}
