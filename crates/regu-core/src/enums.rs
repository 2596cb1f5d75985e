//! Status, category, and role enums for ReguNova.
//!
//! Every enum serializes as `snake_case` and offers `as_str` for SQL binding.
//! `ReportStatus` is the only one with a lifecycle; its `allowed_next_states()`
//! is what the storage layer checks before a transition is written.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ComplianceStatus
// ---------------------------------------------------------------------------

/// Status of a compliance item. All transitions are allowed; items move freely
/// between states as obligations are met or lapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Pending,
}

impl ComplianceStatus {
    /// The label stored in SQL text columns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Regulatory category a compliance item or update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gdpr,
    Ccpa,
    Iso,
    Other,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdpr => "gdpr",
            Self::Ccpa => "ccpa",
            Self::Iso => "iso",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity level for alerts and regulatory updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Status of a report through its generation lifecycle.
///
/// ```text
/// pending → generated
///         → failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Generated,
    Failed,
}

impl ReportStatus {
    /// States a report may move to from here.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Generated, Self::Failed],
            Self::Generated | Self::Failed => &[],
        }
    }

    /// Whether `next` is a legal move from this state.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Generated => "generated",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TeamRole
// ---------------------------------------------------------------------------

/// Role of a team member within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Admin,
    Member,
    Viewer,
}

impl TeamRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }
}

impl Default for TeamRole {
    fn default() -> Self {
        Self::Member
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Regulation
// ---------------------------------------------------------------------------

/// Regulation selectable during the onboarding assessment step.
///
/// Broader than [`Category`]: regulations without a dedicated category
/// (HIPAA, SOX) map to `Category::Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Regulation {
    Gdpr,
    Ccpa,
    Hipaa,
    Sox,
    Iso27001,
}

impl Regulation {
    /// Every selectable regulation, in presentation order.
    pub const ALL: [Self; 5] = [Self::Gdpr, Self::Ccpa, Self::Hipaa, Self::Sox, Self::Iso27001];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdpr => "gdpr",
            Self::Ccpa => "ccpa",
            Self::Hipaa => "hipaa",
            Self::Sox => "sox",
            Self::Iso27001 => "iso27001",
        }
    }

    /// Human-readable name used in generated compliance item titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gdpr => "GDPR",
            Self::Ccpa => "CCPA",
            Self::Hipaa => "HIPAA",
            Self::Sox => "SOX",
            Self::Iso27001 => "ISO 27001",
        }
    }

    /// The compliance category this regulation files under.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Gdpr => Category::Gdpr,
            Self::Ccpa => Category::Ccpa,
            Self::Iso27001 => Category::Iso,
            Self::Hipaa | Self::Sox => Category::Other,
        }
    }
}

impl fmt::Display for Regulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// Document template selectable during the onboarding templates step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    PrivacyPolicy,
    DataProcessingAgreement,
    CookiePolicy,
    TermsOfService,
    DataBreachResponsePlan,
    SecurityPolicy,
}

impl TemplateKind {
    /// Every selectable template, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::PrivacyPolicy,
        Self::DataProcessingAgreement,
        Self::CookiePolicy,
        Self::TermsOfService,
        Self::DataBreachResponsePlan,
        Self::SecurityPolicy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "privacy_policy",
            Self::DataProcessingAgreement => "data_processing_agreement",
            Self::CookiePolicy => "cookie_policy",
            Self::TermsOfService => "terms_of_service",
            Self::DataBreachResponsePlan => "data_breach_response_plan",
            Self::SecurityPolicy => "security_policy",
        }
    }

    /// Human-readable name used in generated report titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "Privacy Policy",
            Self::DataProcessingAgreement => "Data Processing Agreement",
            Self::CookiePolicy => "Cookie Policy",
            Self::TermsOfService => "Terms of Service",
            Self::DataBreachResponsePlan => "Data Breach Response Plan",
            Self::SecurityPolicy => "Security Policy",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
