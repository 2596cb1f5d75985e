//! Regulatory update repository: persisted output of the summarization pipeline.

use regu_core::entities::RegulatoryUpdate;
use regu_core::enums::{Category, Severity};
use regu_core::ids::PREFIX_UPDATE;

use crate::error::DbError;
use crate::helpers::{datetime_column, enum_column};
use crate::service::ReguService;

const SELECT_COLS: &str = "id, user_id, source_text, summary, category, severity, created_at";

fn row_to_update(row: &libsql::Row) -> Result<RegulatoryUpdate, DbError> {
    Ok(RegulatoryUpdate {
        id: row.get(0)?,
        user_id: row.get(1)?,
        source_text: row.get(2)?,
        summary: row.get(3)?,
        category: enum_column(row, 4)?,
        severity: enum_column(row, 5)?,
        created_at: datetime_column(row, 6)?,
    })
}

impl ReguService {
    /// Store a processed regulatory update alongside its source text.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the insert fails.
    pub async fn create_regulatory_update(
        &self,
        source_text: &str,
        summary: &str,
        category: Category,
        severity: Severity,
    ) -> Result<RegulatoryUpdate, DbError> {
        let id = self.db().generate_id(PREFIX_UPDATE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO regulatory_updates (id, user_id, source_text, summary, category, severity)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    source_text,
                    summary,
                    category.as_str(),
                    severity.as_str()
                ],
            )
            .await?;

        self.get_regulatory_update(&id).await
    }

    /// Fetch one of the signed-in user's regulatory updates by id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the update does not exist or belongs to
    /// another user.
    pub async fn get_regulatory_update(&self, id: &str) -> Result<RegulatoryUpdate, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM regulatory_updates WHERE id = ?1 AND user_id = ?2"
                ),
                [id, self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        row_to_update(&row)
    }

    /// List the signed-in user's regulatory updates, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn list_regulatory_updates(
        &self,
        limit: u32,
    ) -> Result<Vec<RegulatoryUpdate>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM regulatory_updates WHERE user_id = ?1 \
                     ORDER BY created_at DESC, id LIMIT {limit}"
                ),
                [self.user_id()],
            )
            .await?;

        let mut updates = Vec::new();
        while let Some(row) = rows.next().await? {
            updates.push(row_to_update(&row)?);
        }
        Ok(updates)
    }
}
