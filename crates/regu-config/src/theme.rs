//! Theme preference, persisted across runs.
//!
//! The flag lives in the user-global config file so the last explicit choice
//! survives restarts. Toggling rewrites only the `[theme]` table and leaves
//! every other section of the file as it was.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Whether dark mode is on. Reflects the last explicit choice.
    #[serde(default)]
    pub dark: bool,
}

/// Persist the theme flag into the user-global config file.
///
/// Returns the path written.
pub fn save_theme(dark: bool) -> Result<PathBuf, ConfigError> {
    let path = crate::global_config_path().ok_or_else(|| ConfigError::InvalidValue {
        field: "theme".into(),
        reason: "no user config directory available".into(),
    })?;
    save_theme_to(&path, dark)?;
    Ok(path)
}

/// Persist the theme flag into `path`, preserving unrelated sections.
pub fn save_theme_to(path: &Path, dark: bool) -> Result<(), ConfigError> {
    let mut doc: toml::Table = if path.exists() {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        toml::Table::new()
    };

    let theme = doc
        .entry("theme")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    if let toml::Value::Table(table) = theme {
        table.insert("dark".into(), toml::Value::Boolean(dark));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&doc)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_creates_file_with_theme_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        save_theme_to(&path, true).expect("save");

        let doc: toml::Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["theme"]["dark"], toml::Value::Boolean(true));
    }

    #[test]
    fn save_preserves_other_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend]\nurl = \"https://acme.regunova.app\"\n").unwrap();

        save_theme_to(&path, true).expect("save");
        save_theme_to(&path, false).expect("save again");

        let doc: toml::Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            doc["backend"]["url"],
            toml::Value::String("https://acme.regunova.app".into())
        );
        assert_eq!(doc["theme"]["dark"], toml::Value::Boolean(false));
    }
}
