//! Alert repository: feed, unread count, mark-as-read.
//!
//! Alerts enter the system through [`ReguService::create_alert`] (the ingest
//! path for monitoring processes); the CLI surfaces them read-only apart from
//! marking single alerts read.

use regu_core::entities::Alert;
use regu_core::enums::Severity;
use regu_core::ids::PREFIX_ALERT;

use crate::error::DbError;
use crate::helpers::{datetime_column, enum_column};
use crate::service::ReguService;

const SELECT_COLS: &str = "id, user_id, title, description, severity, is_read, created_at";

fn row_to_alert(row: &libsql::Row) -> Result<Alert, DbError> {
    Ok(Alert {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        severity: enum_column(row, 4)?,
        is_read: row.get::<i64>(5)? != 0,
        created_at: datetime_column(row, 6)?,
    })
}

impl ReguService {
    /// Create an alert for the signed-in user. Alerts start unread.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the insert fails.
    pub async fn create_alert(
        &self,
        title: &str,
        description: &str,
        severity: Severity,
    ) -> Result<Alert, DbError> {
        let id = self.db().generate_id(PREFIX_ALERT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO alerts (id, user_id, title, description, severity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    title,
                    description,
                    severity.as_str()
                ],
            )
            .await?;

        self.get_alert(&id).await
    }

    /// Fetch one of the signed-in user's alerts by id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the alert does not exist or belongs to
    /// another user.
    pub async fn get_alert(&self, id: &str) -> Result<Alert, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM alerts WHERE id = ?1 AND user_id = ?2"),
                [id, self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        row_to_alert(&row)
    }

    /// List the signed-in user's alerts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn list_alerts(&self, limit: u32) -> Result<Vec<Alert>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM alerts WHERE user_id = ?1 \
                     ORDER BY created_at DESC, id LIMIT {limit}"
                ),
                [self.user_id()],
            )
            .await?;

        let mut alerts = Vec::new();
        while let Some(row) = rows.next().await? {
            alerts.push(row_to_alert(&row)?);
        }
        Ok(alerts)
    }

    /// Mark exactly one alert read. Other alerts are untouched.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the alert does not exist or belongs to
    /// another user.
    pub async fn mark_alert_read(&self, id: &str) -> Result<Alert, DbError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE alerts SET is_read = 1 WHERE id = ?1 AND user_id = ?2",
                [id, self.user_id()],
            )
            .await?;
        if affected == 0 {
            return Err(DbError::NoResult);
        }

        self.get_alert(id).await
    }

    /// Number of unread alerts for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn count_unread_alerts(&self) -> Result<u64, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT count(*) FROM alerts WHERE user_id = ?1 AND is_read = 0",
                [self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or(0))
    }
}
