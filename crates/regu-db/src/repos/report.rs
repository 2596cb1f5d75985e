//! Report repository: the two-phase generation lifecycle.
//!
//! Reports are inserted `pending` and later finalized to `generated` (with a
//! download reference and `generated_at`) or marked `failed`. Both terminal
//! states are locked; the transition guard lives on `ReportStatus`.

use regu_core::entities::Report;
use regu_core::enums::{ReportStatus, TemplateKind};
use regu_core::ids::PREFIX_REPORT;

use crate::error::DbError;
use crate::helpers::{datetime_column, enum_column, optional_datetime_column, optional_text_column};
use crate::retry::{self, RetryConfig};
use crate::service::ReguService;

const SELECT_COLS: &str = "id, user_id, title, status, download_url, created_at, generated_at";

fn row_to_report(row: &libsql::Row) -> Result<Report, DbError> {
    Ok(Report {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        status: enum_column(row, 3)?,
        download_url: optional_text_column(row, 4)?,
        created_at: datetime_column(row, 5)?,
        generated_at: optional_datetime_column(row, 6)?,
    })
}

impl ReguService {
    /// Insert a report in the `pending` state, with no download reference yet.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the insert fails.
    pub async fn create_pending_report(&self, title: &str) -> Result<Report, DbError> {
        let id = self.db().generate_id(PREFIX_REPORT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO reports (id, user_id, title, status) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    title,
                    ReportStatus::Pending.as_str()
                ],
            )
            .await?;

        self.get_report(&id).await
    }

    /// Seed one pending report per selected template, atomically.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if any insert fails; the transaction is rolled back.
    pub async fn create_pending_reports_for_templates(
        &self,
        templates: &[TemplateKind],
    ) -> Result<Vec<Report>, DbError> {
        let mut ids = Vec::with_capacity(templates.len());
        for _ in templates {
            ids.push(self.db().generate_id(PREFIX_REPORT).await?);
        }

        let tx = self.db().conn().transaction().await?;
        for (template, id) in templates.iter().zip(&ids) {
            tx.execute(
                "INSERT INTO reports (id, user_id, title, status) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    format!("{} Template", template.label()),
                    ReportStatus::Pending.as_str()
                ],
            )
            .await?;
        }
        tx.commit().await?;

        let mut reports = Vec::with_capacity(ids.len());
        for id in &ids {
            reports.push(self.get_report(id).await?);
        }
        Ok(reports)
    }

    /// Fetch one of the signed-in user's reports by id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the report does not exist or belongs to
    /// another user.
    pub async fn get_report(&self, id: &str) -> Result<Report, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reports WHERE id = ?1 AND user_id = ?2"),
                [id, self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        row_to_report(&row)
    }

    /// List the signed-in user's reports, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn list_reports(&self, limit: u32) -> Result<Vec<Report>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM reports WHERE user_id = ?1 \
                     ORDER BY created_at DESC, id LIMIT {limit}"
                ),
                [self.user_id()],
            )
            .await?;

        let mut reports = Vec::new();
        while let Some(row) = rows.next().await? {
            reports.push(row_to_report(&row)?);
        }
        Ok(reports)
    }

    /// Finalize a pending report: set `generated`, the download reference, and
    /// `generated_at` in one update.
    ///
    /// Remote databases retry transient infrastructure errors with backoff.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidState` if the report is not `pending`, or
    /// `DbError::NoResult` if it does not exist.
    pub async fn finalize_report(&self, id: &str, download_url: &str) -> Result<Report, DbError> {
        let current = self.get_report(id).await?;
        if !current.status.can_transition_to(ReportStatus::Generated) {
            return Err(DbError::InvalidState(format!(
                "cannot finalize report {id} in state {}",
                current.status
            )));
        }

        const SQL: &str = "UPDATE reports SET status = ?1, download_url = ?2, \
                           generated_at = datetime('now') WHERE id = ?3 AND user_id = ?4";
        let conn = self.db().conn();
        let user_id = self.user_id();
        if self.db().is_remote() {
            retry::with_retries(&RetryConfig::default(), move || async move {
                conn.execute(
                    SQL,
                    libsql::params![ReportStatus::Generated.as_str(), download_url, id, user_id],
                )
                .await
            })
            .await?;
        } else {
            conn.execute(
                SQL,
                libsql::params![ReportStatus::Generated.as_str(), download_url, id, user_id],
            )
            .await?;
        }

        self.get_report(id).await
    }

    /// Mark a pending report `failed`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidState` if the report is not `pending`, or
    /// `DbError::NoResult` if it does not exist.
    pub async fn fail_report(&self, id: &str) -> Result<Report, DbError> {
        let current = self.get_report(id).await?;
        if !current.status.can_transition_to(ReportStatus::Failed) {
            return Err(DbError::InvalidState(format!(
                "cannot fail report {id} in state {}",
                current.status
            )));
        }

        self.db()
            .conn()
            .execute(
                "UPDATE reports SET status = ?1 WHERE id = ?2 AND user_id = ?3",
                libsql::params![ReportStatus::Failed.as_str(), id, self.user_id()],
            )
            .await?;

        self.get_report(id).await
    }

    /// Number of reports the signed-in user has.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn count_reports(&self) -> Result<u64, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT count(*) FROM reports WHERE user_id = ?1",
                [self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or(0))
    }
}
