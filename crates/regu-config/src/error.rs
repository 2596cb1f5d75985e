//! Errors from loading or persisting configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The merged figment could not be extracted into a `ReguConfig`.
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),

    /// A field holds a value the crate cannot work with.
    #[error("bad config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Reading or writing a config file failed.
    #[error("config file i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The on-disk config file is not valid TOML.
    #[error("unreadable config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Writing the config back out as TOML failed.
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
