//! CLI response types returned as JSON by `rnv` commands.
//!
//! The JSON shapes printed by commands such as
//! `rnv dashboard`, `rnv onboard submit`, `rnv reports generate`, and
//! `rnv subscribe`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Alert, RegulatoryUpdate, Report};
use crate::onboarding::StepId;

/// Compliance posture summary shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceOverview {
    pub total: u64,
    pub compliant: u64,
    pub non_compliant: u64,
    pub pending: u64,
    /// Share of items compliant, as a whole percentage. Zero items reads as 0.
    pub percent_compliant: u8,
}

impl ComplianceOverview {
    /// Build an overview from raw status counts.
    #[must_use]
    pub fn from_counts(compliant: u64, non_compliant: u64, pending: u64) -> Self {
        let total = compliant + non_compliant + pending;
        let percent_compliant = if total == 0 {
            0
        } else {
            u8::try_from(compliant * 100 / total).unwrap_or(100)
        };
        Self {
            total,
            compliant,
            non_compliant,
            pending,
            percent_compliant,
        }
    }
}

/// Response from `rnv dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub completed_steps: Vec<StepId>,
    pub next_step: Option<StepId>,
    pub compliance: ComplianceOverview,
    pub unread_alerts: u64,
    pub recent_alerts: Vec<Alert>,
}

/// Response from `rnv onboard status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OnboardingStatusResponse {
    pub completed: Vec<StepId>,
    pub next_step: Option<StepId>,
    pub all_complete: bool,
}

/// Response from `rnv onboard submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StepSubmitResponse {
    pub step: StepId,
    pub completed: bool,
    /// Rows written by this submission (1 for profile, one per selection otherwise).
    pub rows_written: u32,
}

/// Response from `rnv reports generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportGenerateResponse {
    pub report: Report,
}

/// Response from `rnv updates process`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateProcessResponse {
    pub update: RegulatoryUpdate,
}

/// Response from `rnv subscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
    /// Whether a browser was opened; false means the URL was printed instead.
    pub browser_opened: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overview_percentage_rounds_down() {
        let overview = ComplianceOverview::from_counts(2, 1, 0);
        assert_eq!(overview.total, 3);
        assert_eq!(overview.percent_compliant, 66);
    }

    #[test]
    fn overview_with_no_items_is_zero_percent() {
        let overview = ComplianceOverview::from_counts(0, 0, 0);
        assert_eq!(overview.total, 0);
        assert_eq!(overview.percent_compliant, 0);
    }

    #[test]
    fn overview_all_compliant_is_full_percent() {
        let overview = ComplianceOverview::from_counts(4, 0, 0);
        assert_eq!(overview.percent_compliant, 100);
    }
}
