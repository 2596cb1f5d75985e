//! Summarization provider configuration.

use serde::{Deserialize, Serialize};

/// Default completion model.
fn default_model() -> String {
    "gpt-3.5-turbo".into()
}

/// Default environment variable holding the provider API key.
fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}

/// Default sampling temperature.
const fn default_temperature() -> f64 {
    0.2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Completion model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable the provider API key is read from.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Sampling temperature. Low keeps summaries close to the source text.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
        }
    }
}

impl AiConfig {
    /// Check if an API key is available in the configured env var.
    pub fn is_configured(&self) -> bool {
        std::env::var(&self.api_key_env).is_ok_and(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
    }
}
