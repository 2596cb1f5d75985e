//! Settings that are not tied to one backend service.

use serde::{Deserialize, Serialize};

/// Rows returned by list commands when no flag overrides it.
const fn default_limit() -> u32 {
    20
}

/// Default report generation delay in seconds.
const fn default_report_delay_secs() -> u64 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Delay between a report's insertion and its finalization, in seconds.
    #[serde(default = "default_report_delay_secs")]
    pub report_delay_secs: u64,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            report_delay_secs: default_report_delay_secs(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GeneralConfig::default();
        assert_eq!(config.report_delay_secs, 3);
        assert_eq!(config.default_limit, 20);
    }
}
