//! Onboarding step model: step identifiers, per-step form drafts with
//! validation, and pure completion derivation.
//!
//! Completion is never stored. It is derived fresh from a snapshot of what
//! exists in storage, so the four checks stay independent: any subset of
//! steps can be complete at once, and a probe that failed simply reports
//! nothing found for its step.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Regulation, TeamRole, TemplateKind};
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// StepId
// ---------------------------------------------------------------------------

/// Identifier for one of the four onboarding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Profile,
    Assessment,
    Templates,
    Team,
}

impl StepId {
    /// Every step, in wizard order.
    pub const ALL: [Self; 4] = [Self::Profile, Self::Assessment, Self::Templates, Self::Team];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Assessment => "assessment",
            Self::Templates => "templates",
            Self::Team => "team",
        }
    }

    /// Human-readable step name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Company Profile",
            Self::Assessment => "Compliance Assessment",
            Self::Templates => "Document Templates",
            Self::Team => "Team Setup",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Completion derivation
// ---------------------------------------------------------------------------

/// Results of the four existence probes, one field per step.
///
/// A probe that failed remotely contributes its default (`None` / `0`), which
/// derives to not-complete for that step and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OnboardingSnapshot {
    /// `company_name` of the user's profile row, if one exists.
    pub profile_company_name: Option<String>,
    pub compliance_items: u64,
    pub reports: u64,
    pub team_members: u64,
}

/// Derive the set of completed steps from a snapshot, in wizard order.
///
/// The four checks are independent: no step's completion depends on any
/// other step's state.
#[must_use]
pub fn derive_completed_steps(snapshot: &OnboardingSnapshot) -> Vec<StepId> {
    let mut completed = Vec::new();
    if snapshot
        .profile_company_name
        .as_deref()
        .is_some_and(|name| !name.is_empty())
    {
        completed.push(StepId::Profile);
    }
    if snapshot.compliance_items > 0 {
        completed.push(StepId::Assessment);
    }
    if snapshot.reports > 0 {
        completed.push(StepId::Templates);
    }
    if snapshot.team_members > 0 {
        completed.push(StepId::Team);
    }
    completed
}

/// First step not yet completed, in wizard order. `None` once all four are done.
#[must_use]
pub fn next_step(completed: &[StepId]) -> Option<StepId> {
    StepId::ALL.into_iter().find(|step| !completed.contains(step))
}

// ---------------------------------------------------------------------------
// Step forms
// ---------------------------------------------------------------------------

/// A team member entry as drafted in the wizard, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TeamMemberDraft {
    pub email: String,
    #[serde(default)]
    pub role: TeamRole,
}

/// Draft form for one onboarding step.
///
/// Each variant carries that step's fields and owns its validation.
/// Validation runs before any write is attempted; a draft that fails never
/// reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepForm {
    Profile {
        company_name: String,
        industry: String,
        region: String,
        size: String,
    },
    Assessment {
        regulations: Vec<Regulation>,
    },
    Templates {
        templates: Vec<TemplateKind>,
    },
    Team {
        members: Vec<TeamMemberDraft>,
    },
}

impl StepForm {
    /// The step this draft belongs to.
    #[must_use]
    pub const fn step_id(&self) -> StepId {
        match self {
            Self::Profile { .. } => StepId::Profile,
            Self::Assessment { .. } => StepId::Assessment,
            Self::Templates { .. } => StepId::Templates,
            Self::Team { .. } => StepId::Team,
        }
    }

    /// Validate the draft's fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a required field is blank, a
    /// selection is empty, or a team member email has no `@`.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Profile {
                company_name,
                industry,
                region,
                size,
            } => {
                for (field, value) in [
                    ("company_name", company_name),
                    ("industry", industry),
                    ("region", region),
                    ("size", size),
                ] {
                    if value.trim().is_empty() {
                        return Err(CoreError::Validation(format!(
                            "profile field '{field}' is required"
                        )));
                    }
                }
                Ok(())
            }
            Self::Assessment { regulations } => {
                if regulations.is_empty() {
                    return Err(CoreError::Validation(
                        "select at least one regulation".into(),
                    ));
                }
                Ok(())
            }
            Self::Templates { templates } => {
                if templates.is_empty() {
                    return Err(CoreError::Validation("select at least one template".into()));
                }
                Ok(())
            }
            Self::Team { members } => {
                if members.is_empty() {
                    return Err(CoreError::Validation(
                        "add at least one team member".into(),
                    ));
                }
                for member in members {
                    if !member.email.contains('@') {
                        return Err(CoreError::Validation(format!(
                            "invalid team member email: {}",
                            member.email
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
