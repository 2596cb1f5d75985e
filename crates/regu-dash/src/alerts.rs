//! Alert feed: load once, patch single entries in place on mark-read.

use regu_core::entities::Alert;
use regu_db::service::ReguService;

use crate::error::DashError;

/// Default number of alerts fetched into the feed.
pub const DEFAULT_ALERT_LIMIT: u32 = 50;

/// A loaded alert feed, newest first.
///
/// `mark_read` persists the change and then patches the one matching entry
/// in place instead of refetching, so feed order and every other entry's
/// read flag stay exactly as loaded.
#[derive(Debug)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    /// Load the newest alerts for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the query fails.
    pub async fn load(service: &ReguService, limit: u32) -> Result<Self, DashError> {
        let alerts = service.list_alerts(limit).await?;
        Ok(Self { alerts })
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Unread count within the loaded feed.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.is_read).count()
    }

    /// Mark one alert read, in storage and in this feed's copy.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the alert does not exist or the update
    /// fails. The feed is left unchanged in that case.
    pub async fn mark_read(&mut self, service: &ReguService, id: &str) -> Result<(), DashError> {
        let updated = service.mark_alert_read(id).await?;
        if let Some(entry) = self.alerts.iter_mut().find(|alert| alert.id == updated.id) {
            *entry = updated;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regu_core::enums::Severity;

    use crate::test_support::helpers::{break_table, test_service};

    #[tokio::test]
    async fn mark_read_patches_only_the_target_entry() {
        let svc = test_service().await;
        svc.create_alert("First", "", Severity::Low).await.unwrap();
        let target = svc
            .create_alert("Second", "", Severity::High)
            .await
            .unwrap();
        svc.create_alert("Third", "", Severity::Medium)
            .await
            .unwrap();

        let mut feed = AlertFeed::load(&svc, DEFAULT_ALERT_LIMIT).await.unwrap();
        assert_eq!(feed.alerts().len(), 3);
        assert_eq!(feed.unread_count(), 3);
        let order_before: Vec<String> =
            feed.alerts().iter().map(|alert| alert.id.clone()).collect();

        feed.mark_read(&svc, &target.id).await.unwrap();

        let order_after: Vec<String> =
            feed.alerts().iter().map(|alert| alert.id.clone()).collect();
        assert_eq!(order_after, order_before);
        assert_eq!(feed.unread_count(), 2);
        for alert in feed.alerts() {
            assert_eq!(alert.is_read, alert.id == target.id);
        }
    }

    #[tokio::test]
    async fn mark_read_unknown_id_leaves_feed_unchanged() {
        let svc = test_service().await;
        svc.create_alert("Only", "", Severity::Low).await.unwrap();

        let mut feed = AlertFeed::load(&svc, DEFAULT_ALERT_LIMIT).await.unwrap();
        let result = feed.mark_read(&svc, "alr-00000000").await;
        assert!(matches!(result, Err(DashError::Db(_))));
        assert_eq!(feed.unread_count(), 1);
    }

    #[tokio::test]
    async fn load_failure_surfaces_error() {
        let svc = test_service().await;
        break_table(&svc, "alerts").await;

        let result = AlertFeed::load(&svc, DEFAULT_ALERT_LIMIT).await;
        assert!(matches!(result, Err(DashError::Db(_))));
    }
}
