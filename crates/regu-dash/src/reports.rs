//! Report feed and the two-phase generation flow.
//!
//! Generating a report is two-phase: the pending row commits immediately so
//! listings show it at once, then a background task finalizes it after a
//! configurable delay and signals `refresh` so watchers reload. A failed
//! finalization moves the row to `failed` instead of leaving it pending.

use std::sync::Arc;
use std::time::Duration;

use regu_core::entities::Report;
use regu_core::enums::ReportStatus;
use regu_db::error::DbError;
use regu_db::service::ReguService;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::error::DashError;

/// Default number of reports fetched into the feed.
pub const DEFAULT_REPORT_LIMIT: u32 = 50;

/// Stable download reference for a finished report.
///
/// There is no file store behind these yet; the reference is unique per
/// report so resolution can be added without touching stored rows.
#[must_use]
pub fn download_reference(report_id: &str) -> String {
    format!("regunova://reports/{report_id}")
}

/// A generation in flight, returned by [`generate_report`].
#[derive(Debug)]
pub struct PendingGeneration {
    /// The pending row, already visible to listings.
    pub report: Report,
    handle: JoinHandle<Result<Report, DbError>>,
}

impl PendingGeneration {
    /// Wait for the background task and return the final row.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if finalization failed and
    /// [`DashError::Generation`] if the task was cancelled or panicked.
    pub async fn wait(self) -> Result<Report, DashError> {
        match self.handle.await {
            Ok(result) => Ok(result?),
            Err(join_error) => Err(DashError::Generation(join_error.to_string())),
        }
    }
}

/// Create a pending report and schedule its finalization.
///
/// The background task sleeps `delay`, marks the report generated with a
/// download reference, and signals `refresh` whether it succeeded or not so
/// watchers always reload. On failure it moves the row to `failed`; a row
/// already out of `pending` is left exactly as found.
///
/// # Errors
///
/// Returns [`DashError::Db`] if the pending row cannot be created.
pub async fn generate_report(
    service: Arc<ReguService>,
    title: &str,
    delay: Duration,
    refresh: Arc<Notify>,
) -> Result<PendingGeneration, DashError> {
    let report = service.create_pending_report(title).await?;
    tracing::debug!(report_id = %report.id, ?delay, "report generation scheduled");

    let handle = tokio::spawn({
        let service = Arc::clone(&service);
        let refresh = Arc::clone(&refresh);
        let report_id = report.id.clone();
        async move {
            tokio::time::sleep(delay).await;

            let outcome = match service
                .finalize_report(&report_id, &download_reference(&report_id))
                .await
            {
                Ok(final_report) => Ok(final_report),
                Err(error) => {
                    tracing::warn!(report_id = %report_id, %error, "report finalization failed");
                    if let Err(fail_error) = service.fail_report(&report_id).await {
                        tracing::warn!(
                            report_id = %report_id,
                            error = %fail_error,
                            "could not mark report failed"
                        );
                    }
                    Err(error)
                }
            };

            refresh.notify_waiters();
            outcome
        }
    });

    Ok(PendingGeneration { report, handle })
}

/// A loaded report feed, newest first.
#[derive(Debug)]
pub struct ReportFeed {
    reports: Vec<Report>,
}

impl ReportFeed {
    /// Load the signed-in user's reports.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the query fails.
    pub async fn load(service: &ReguService, limit: u32) -> Result<Self, DashError> {
        let reports = service.list_reports(limit).await?;
        Ok(Self { reports })
    }

    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Reports still waiting on generation.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.status == ReportStatus::Pending)
            .count()
    }

    /// Replace the feed with a fresh fetch. Called after a refresh signal.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the query fails. The feed keeps its
    /// previous contents in that case.
    pub async fn reload(&mut self, service: &ReguService, limit: u32) -> Result<(), DashError> {
        self.reports = service.list_reports(limit).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::test_service;

    const SHORT_DELAY: Duration = Duration::from_millis(20);

    #[tokio::test]
    async fn generation_is_two_phase_and_signals_refresh() {
        let svc = Arc::new(test_service().await);
        let refresh = Arc::new(Notify::new());

        // Register interest before generation starts so the signal cannot
        // be missed.
        let notified = refresh.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        let pending = generate_report(Arc::clone(&svc), "Q3 Audit", SHORT_DELAY, Arc::clone(&refresh))
            .await
            .unwrap();
        assert_eq!(pending.report.status, ReportStatus::Pending);
        assert_eq!(pending.report.download_url, None);

        // Visible to listings while still pending.
        let mut feed = ReportFeed::load(&svc, DEFAULT_REPORT_LIMIT).await.unwrap();
        assert_eq!(feed.reports().len(), 1);
        assert_eq!(feed.pending_count(), 1);

        notified.as_mut().await;

        feed.reload(&svc, DEFAULT_REPORT_LIMIT).await.unwrap();
        assert_eq!(feed.pending_count(), 0);
        let report = &feed.reports()[0];
        assert_eq!(report.status, ReportStatus::Generated);
        assert_eq!(
            report.download_url.as_deref(),
            Some(download_reference(&report.id).as_str())
        );
        assert!(report.generated_at.is_some());
    }

    #[tokio::test]
    async fn wait_returns_the_generated_row() {
        let svc = Arc::new(test_service().await);

        let pending = generate_report(
            Arc::clone(&svc),
            "SOC 2 Readiness",
            Duration::from_millis(5),
            Arc::new(Notify::new()),
        )
        .await
        .unwrap();
        let report = pending.wait().await.unwrap();

        assert_eq!(report.title, "SOC 2 Readiness");
        assert_eq!(report.status, ReportStatus::Generated);
        assert!(report.download_url.is_some());
    }

    #[tokio::test]
    async fn finalization_failure_still_signals_refresh() {
        let svc = Arc::new(test_service().await);
        let refresh = Arc::new(Notify::new());

        let notified = refresh.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        let pending = generate_report(Arc::clone(&svc), "Doomed", SHORT_DELAY, Arc::clone(&refresh))
            .await
            .unwrap();

        // Remove the row out from under the scheduler.
        svc.db()
            .conn()
            .execute(
                "DELETE FROM reports WHERE id = ?1",
                [pending.report.id.as_str()],
            )
            .await
            .unwrap();

        notified.as_mut().await;
        let result = pending.wait().await;
        assert!(matches!(result, Err(DashError::Db(DbError::NoResult))));
    }

    #[tokio::test]
    async fn already_final_report_is_not_clobbered() {
        let svc = Arc::new(test_service().await);

        let pending = generate_report(
            Arc::clone(&svc),
            "Raced",
            Duration::from_millis(50),
            Arc::new(Notify::new()),
        )
        .await
        .unwrap();

        // Finalize out of band before the scheduler wakes.
        let manual_url = "https://files.example.com/raced.pdf";
        svc.finalize_report(&pending.report.id, manual_url)
            .await
            .unwrap();

        let report_id = pending.report.id.clone();
        let result = pending.wait().await;
        assert!(matches!(
            result,
            Err(DashError::Db(DbError::InvalidState(_)))
        ));

        // The out-of-band finalization stands untouched.
        let report = svc.get_report(&report_id).await.unwrap();
        assert_eq!(report.status, ReportStatus::Generated);
        assert_eq!(report.download_url.as_deref(), Some(manual_url));
    }
}
