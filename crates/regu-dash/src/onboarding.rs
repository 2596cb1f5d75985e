//! Onboarding orchestration: storage probes, status derivation, and step
//! submission.
//!
//! Completion is derived fresh from storage on every read. The four probes
//! run concurrently and independently, so any subset of steps can be
//! complete and a single failing probe degrades only its own step.

use regu_core::onboarding::{
    OnboardingSnapshot, StepForm, StepId, TeamMemberDraft, derive_completed_steps, next_step,
};
use regu_core::responses::{OnboardingStatusResponse, StepSubmitResponse};
use regu_db::error::DbError;
use regu_db::service::ReguService;

use crate::error::DashError;

/// Fall back to a step's "nothing found" default when its probe fails.
fn probe_or_default<T: Default>(step: StepId, result: Result<T, DbError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(step = %step, %error, "onboarding probe failed, treating step as not complete");
            T::default()
        }
    }
}

/// Probe storage for evidence of each onboarding step.
///
/// A probe that fails contributes its default (nothing found) instead of
/// failing the snapshot, so one broken table never hides the other steps'
/// completion.
pub async fn load_snapshot(service: &ReguService) -> OnboardingSnapshot {
    let (company_name, items, reports, members) = tokio::join!(
        service.profile_company_name(),
        service.count_compliance_items(),
        service.count_reports(),
        service.count_team_members(),
    );

    OnboardingSnapshot {
        profile_company_name: probe_or_default(StepId::Profile, company_name),
        compliance_items: probe_or_default(StepId::Assessment, items),
        reports: probe_or_default(StepId::Templates, reports),
        team_members: probe_or_default(StepId::Team, members),
    }
}

/// Derive a status response from an already-loaded snapshot.
#[must_use]
pub fn status_from_snapshot(snapshot: &OnboardingSnapshot) -> OnboardingStatusResponse {
    let completed = derive_completed_steps(snapshot);
    let next = next_step(&completed);
    let all_complete = completed.len() == StepId::ALL.len();
    OnboardingStatusResponse {
        completed,
        next_step: next,
        all_complete,
    }
}

/// Current onboarding status for the signed-in user.
pub async fn onboarding_status(service: &ReguService) -> OnboardingStatusResponse {
    let snapshot = load_snapshot(service).await;
    status_from_snapshot(&snapshot)
}

/// Validate a step draft and persist it.
///
/// Validation runs first; a draft that fails never reaches storage. Each
/// step writes through its own repository path, so a failed write leaves
/// every other step untouched and the caller's draft intact for retry.
///
/// Free-text fields (profile fields, team emails) are trimmed before
/// storage so completion probes never see whitespace-only values.
///
/// # Errors
///
/// Returns [`DashError::Validation`] when the draft is invalid and
/// [`DashError::Db`] when the write fails.
pub async fn submit_step(
    service: &ReguService,
    form: &StepForm,
) -> Result<StepSubmitResponse, DashError> {
    form.validate()?;

    let rows_written = match form {
        StepForm::Profile {
            company_name,
            industry,
            region,
            size,
        } => {
            service
                .upsert_profile(
                    company_name.trim(),
                    industry.trim(),
                    region.trim(),
                    size.trim(),
                )
                .await?;
            1
        }
        StepForm::Assessment { regulations } => {
            service
                .create_compliance_items_for_regulations(regulations)
                .await?
                .len()
        }
        StepForm::Templates { templates } => {
            service
                .create_pending_reports_for_templates(templates)
                .await?
                .len()
        }
        StepForm::Team { members } => {
            let drafts: Vec<TeamMemberDraft> = members
                .iter()
                .map(|member| TeamMemberDraft {
                    email: member.email.trim().to_string(),
                    role: member.role,
                })
                .collect();
            service.add_team_members(&drafts).await?.len()
        }
    };

    Ok(StepSubmitResponse {
        step: form.step_id(),
        completed: true,
        rows_written: u32::try_from(rows_written).unwrap_or(u32::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regu_core::enums::{Regulation, TeamRole, TemplateKind};

    use crate::test_support::helpers::{break_table, test_service};

    fn profile_form() -> StepForm {
        StepForm::Profile {
            company_name: "Acme Corp".into(),
            industry: "technology".into(),
            region: "europe".into(),
            size: "11-50".into(),
        }
    }

    #[tokio::test]
    async fn fresh_service_has_no_completed_steps() {
        let svc = test_service().await;

        let status = onboarding_status(&svc).await;
        assert_eq!(status.completed, vec![]);
        assert_eq!(status.next_step, Some(StepId::Profile));
        assert!(!status.all_complete);
    }

    #[tokio::test]
    async fn submitting_one_step_completes_only_that_step() {
        let svc = test_service().await;

        let form = StepForm::Templates {
            templates: vec![TemplateKind::PrivacyPolicy, TemplateKind::CookiePolicy],
        };
        let response = submit_step(&svc, &form).await.unwrap();
        assert_eq!(response.step, StepId::Templates);
        assert!(response.completed);
        assert_eq!(response.rows_written, 2);

        let status = onboarding_status(&svc).await;
        assert_eq!(status.completed, vec![StepId::Templates]);
        assert_eq!(status.next_step, Some(StepId::Profile));
        assert!(!status.all_complete);
    }

    #[tokio::test]
    async fn profile_submit_trims_fields() {
        let svc = test_service().await;

        let form = StepForm::Profile {
            company_name: "  Acme Corp  ".into(),
            industry: " technology ".into(),
            region: "europe".into(),
            size: "11-50".into(),
        };
        submit_step(&svc, &form).await.unwrap();

        let profile = svc.get_profile().await.unwrap().unwrap();
        assert_eq!(profile.company_name, "Acme Corp");
        assert_eq!(profile.industry, "technology");
    }

    #[tokio::test]
    async fn invalid_draft_writes_nothing() {
        let svc = test_service().await;

        let form = StepForm::Team {
            members: vec![
                TeamMemberDraft {
                    email: "dana@example.com".into(),
                    role: TeamRole::Admin,
                },
                TeamMemberDraft {
                    email: "not-an-email".into(),
                    role: TeamRole::Member,
                },
            ],
        };
        let result = submit_step(&svc, &form).await;
        assert!(matches!(result, Err(DashError::Validation(_))));

        // The valid member must not have been written either.
        assert_eq!(svc.count_team_members().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn assessment_submit_writes_one_item_per_regulation() {
        let svc = test_service().await;

        let form = StepForm::Assessment {
            regulations: vec![Regulation::Gdpr, Regulation::Hipaa, Regulation::Iso27001],
        };
        let response = submit_step(&svc, &form).await.unwrap();
        assert_eq!(response.rows_written, 3);

        let items = svc.list_compliance_items(10).await.unwrap();
        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        assert!(titles.contains(&"GDPR Compliance"));
        assert!(titles.contains(&"HIPAA Compliance"));
        assert!(titles.contains(&"ISO 27001 Compliance"));
    }

    #[tokio::test]
    async fn all_steps_complete_after_full_wizard() {
        let svc = test_service().await;

        submit_step(&svc, &profile_form()).await.unwrap();
        submit_step(
            &svc,
            &StepForm::Assessment {
                regulations: vec![Regulation::Gdpr],
            },
        )
        .await
        .unwrap();
        submit_step(
            &svc,
            &StepForm::Templates {
                templates: vec![TemplateKind::SecurityPolicy],
            },
        )
        .await
        .unwrap();
        submit_step(
            &svc,
            &StepForm::Team {
                members: vec![TeamMemberDraft {
                    email: "dana@example.com".into(),
                    role: TeamRole::Admin,
                }],
            },
        )
        .await
        .unwrap();

        let status = onboarding_status(&svc).await;
        assert_eq!(status.completed, StepId::ALL.to_vec());
        assert_eq!(status.next_step, None);
        assert!(status.all_complete);
    }

    #[tokio::test]
    async fn failed_probe_degrades_only_its_step() {
        let svc = test_service().await;

        submit_step(
            &svc,
            &StepForm::Templates {
                templates: vec![TemplateKind::PrivacyPolicy],
            },
        )
        .await
        .unwrap();

        break_table(&svc, "profiles").await;

        let snapshot = load_snapshot(&svc).await;
        assert_eq!(snapshot.profile_company_name, None);
        assert_eq!(snapshot.reports, 1);

        let status = status_from_snapshot(&snapshot);
        assert_eq!(status.completed, vec![StepId::Templates]);
    }

    #[tokio::test]
    async fn failed_write_surfaces_error_and_leaves_draft_intact() {
        let svc = test_service().await;
        break_table(&svc, "profiles").await;

        let form = profile_form();
        let draft_before = form.clone();

        let result = submit_step(&svc, &form).await;
        assert!(matches!(result, Err(DashError::Db(_))));

        // The draft is untouched and still valid, ready for resubmission.
        assert_eq!(form, draft_before);
        assert!(form.validate().is_ok());

        // Other steps keep working through their own tables.
        let response = submit_step(
            &svc,
            &StepForm::Assessment {
                regulations: vec![Regulation::Ccpa],
            },
        )
        .await
        .unwrap();
        assert_eq!(response.rows_written, 1);
    }
}
