//! Profile repository: one row per user, keyed on the user id.

use regu_core::entities::Profile;

use crate::error::DbError;
use crate::helpers::datetime_column;
use crate::service::ReguService;

const SELECT_COLS: &str = "id, company_name, industry, region, size, created_at, updated_at";

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DbError> {
    Ok(Profile {
        id: row.get(0)?,
        company_name: row.get(1)?,
        industry: row.get(2)?,
        region: row.get(3)?,
        size: row.get(4)?,
        created_at: datetime_column(row, 5)?,
        updated_at: datetime_column(row, 6)?,
    })
}

impl ReguService {
    /// Fetch the signed-in user's profile, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn get_profile(&self) -> Result<Option<Profile>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM profiles WHERE id = ?1"),
                [self.user_id()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    /// The signed-in user's company name, or `None` when no profile row exists.
    ///
    /// Lightweight probe for onboarding status. A row with an empty name
    /// returns `Some("")`, which is distinct from no row at all.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn profile_company_name(&self) -> Result<Option<String>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT company_name FROM profiles WHERE id = ?1",
                [self.user_id()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// Create or replace the signed-in user's profile.
    ///
    /// Keyed on the user id: the first write inserts, later writes overwrite
    /// all four fields and bump `updated_at`. `created_at` is set once.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the write fails.
    pub async fn upsert_profile(
        &self,
        company_name: &str,
        industry: &str,
        region: &str,
        size: &str,
    ) -> Result<Profile, DbError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO profiles (id, company_name, industry, region, size)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     company_name = excluded.company_name,
                     industry = excluded.industry,
                     region = excluded.region,
                     size = excluded.size,
                     updated_at = datetime('now')",
                libsql::params![self.user_id(), company_name, industry, region, size],
            )
            .await?;

        self.get_profile().await?.ok_or(DbError::NoResult)
    }
}
