//! Dashboard assembly.
//!
//! One call gathers everything the dashboard screen shows. Sections degrade
//! independently: a failed query logs a warning and renders empty rather
//! than taking the whole dashboard down.

use regu_core::onboarding::{derive_completed_steps, next_step};
use regu_core::responses::{ComplianceOverview, DashboardResponse};
use regu_db::service::ReguService;

use crate::onboarding::load_snapshot;

/// Number of alerts shown in the dashboard feed.
const RECENT_ALERTS: u32 = 5;

/// Assemble the dashboard for the signed-in user.
pub async fn load_dashboard(service: &ReguService) -> DashboardResponse {
    let (snapshot, status_counts, unread, recent) = tokio::join!(
        load_snapshot(service),
        service.compliance_status_counts(),
        service.count_unread_alerts(),
        service.list_alerts(RECENT_ALERTS),
    );

    let completed_steps = derive_completed_steps(&snapshot);
    let next = next_step(&completed_steps);

    let (compliant, non_compliant, pending) = status_counts.unwrap_or_else(|error| {
        tracing::warn!(%error, "compliance counts unavailable, dashboard shows zero items");
        (0, 0, 0)
    });
    let unread_alerts = unread.unwrap_or_else(|error| {
        tracing::warn!(%error, "unread alert count unavailable");
        0
    });
    let recent_alerts = recent.unwrap_or_else(|error| {
        tracing::warn!(%error, "alert feed unavailable, dashboard shows none");
        Vec::new()
    });

    DashboardResponse {
        completed_steps,
        next_step: next,
        compliance: ComplianceOverview::from_counts(compliant, non_compliant, pending),
        unread_alerts,
        recent_alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regu_core::enums::{ComplianceStatus, Regulation, Severity};
    use regu_core::onboarding::{StepForm, StepId};

    use crate::onboarding::submit_step;
    use crate::test_support::helpers::{break_table, test_service};

    #[tokio::test]
    async fn empty_dashboard_renders_zeroes() {
        let svc = test_service().await;

        let dashboard = load_dashboard(&svc).await;
        assert_eq!(dashboard.completed_steps, vec![]);
        assert_eq!(dashboard.next_step, Some(StepId::Profile));
        assert_eq!(dashboard.compliance.total, 0);
        assert_eq!(dashboard.compliance.percent_compliant, 0);
        assert_eq!(dashboard.unread_alerts, 0);
        assert!(dashboard.recent_alerts.is_empty());
    }

    #[tokio::test]
    async fn dashboard_reflects_seeded_data() {
        let svc = test_service().await;

        submit_step(
            &svc,
            &StepForm::Assessment {
                regulations: vec![Regulation::Gdpr, Regulation::Ccpa],
            },
        )
        .await
        .unwrap();

        let items = svc.list_compliance_items(10).await.unwrap();
        svc.set_compliance_status(&items[0].id, ComplianceStatus::Compliant)
            .await
            .unwrap();

        svc.create_alert("Fine issued", "", Severity::High)
            .await
            .unwrap();
        let read = svc
            .create_alert("Guidance updated", "", Severity::Low)
            .await
            .unwrap();
        svc.mark_alert_read(&read.id).await.unwrap();

        let dashboard = load_dashboard(&svc).await;
        assert_eq!(dashboard.completed_steps, vec![StepId::Assessment]);
        assert_eq!(dashboard.compliance.total, 2);
        assert_eq!(dashboard.compliance.compliant, 1);
        assert_eq!(dashboard.compliance.pending, 1);
        assert_eq!(dashboard.compliance.percent_compliant, 50);
        assert_eq!(dashboard.unread_alerts, 1);
        assert_eq!(dashboard.recent_alerts.len(), 2);
    }

    #[tokio::test]
    async fn alert_feed_is_capped() {
        let svc = test_service().await;

        for i in 0..7 {
            svc.create_alert(&format!("Alert {i}"), "", Severity::Medium)
                .await
                .unwrap();
        }

        let dashboard = load_dashboard(&svc).await;
        assert_eq!(dashboard.recent_alerts.len(), 5);
        assert_eq!(dashboard.unread_alerts, 7);
    }

    #[tokio::test]
    async fn broken_alerts_degrade_without_touching_compliance() {
        let svc = test_service().await;

        submit_step(
            &svc,
            &StepForm::Assessment {
                regulations: vec![Regulation::Gdpr],
            },
        )
        .await
        .unwrap();

        break_table(&svc, "alerts").await;

        let dashboard = load_dashboard(&svc).await;
        assert_eq!(dashboard.unread_alerts, 0);
        assert!(dashboard.recent_alerts.is_empty());
        assert_eq!(dashboard.compliance.total, 1);
        assert_eq!(dashboard.completed_steps, vec![StepId::Assessment]);
    }

    #[tokio::test]
    async fn broken_compliance_degrades_without_touching_alerts() {
        let svc = test_service().await;

        svc.create_alert("Still here", "", Severity::Medium)
            .await
            .unwrap();
        break_table(&svc, "compliance_items").await;

        let dashboard = load_dashboard(&svc).await;
        assert_eq!(dashboard.compliance.total, 0);
        assert_eq!(dashboard.unread_alerts, 1);
        assert_eq!(dashboard.recent_alerts.len(), 1);
    }
}
