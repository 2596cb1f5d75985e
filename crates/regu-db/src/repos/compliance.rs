//! Compliance item repository: creation, listing, status changes, counts.

use chrono::{DateTime, Duration, Utc};

use regu_core::entities::ComplianceItem;
use regu_core::enums::{Category, ComplianceStatus, Regulation};
use regu_core::ids::PREFIX_COMPLIANCE;

use crate::error::DbError;
use crate::helpers::{datetime_column, enum_column, optional_datetime_column};
use crate::service::ReguService;

/// Days until a newly seeded compliance item is due.
const INITIAL_DUE_DAYS: i64 = 30;

const SELECT_COLS: &str =
    "id, user_id, title, description, status, category, due_date, created_at, updated_at";

fn row_to_item(row: &libsql::Row) -> Result<ComplianceItem, DbError> {
    Ok(ComplianceItem {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        status: enum_column(row, 4)?,
        category: enum_column(row, 5)?,
        due_date: optional_datetime_column(row, 6)?,
        created_at: datetime_column(row, 7)?,
        updated_at: datetime_column(row, 8)?,
    })
}

impl ReguService {
    /// Create a single compliance item. New items always start `pending`.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the insert fails.
    pub async fn create_compliance_item(
        &self,
        title: &str,
        description: &str,
        category: Category,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<ComplianceItem, DbError> {
        let id = self.db().generate_id(PREFIX_COMPLIANCE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO compliance_items (id, user_id, title, description, status, category, due_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    title,
                    description,
                    ComplianceStatus::Pending.as_str(),
                    category.as_str(),
                    due_date.map(|d| d.to_rfc3339()),
                ],
            )
            .await?;

        self.get_compliance_item(&id).await
    }

    /// Seed one compliance item per selected regulation, atomically.
    ///
    /// Each item is titled after the regulation, starts `pending`, files under
    /// the regulation's category, and is due 30 days out. Either all rows land
    /// or none do.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if any insert fails; the transaction is rolled back.
    pub async fn create_compliance_items_for_regulations(
        &self,
        regulations: &[Regulation],
    ) -> Result<Vec<ComplianceItem>, DbError> {
        let due = Utc::now() + Duration::days(INITIAL_DUE_DAYS);

        let mut ids = Vec::with_capacity(regulations.len());
        for _ in regulations {
            ids.push(self.db().generate_id(PREFIX_COMPLIANCE).await?);
        }

        let tx = self.db().conn().transaction().await?;
        for (regulation, id) in regulations.iter().zip(&ids) {
            tx.execute(
                "INSERT INTO compliance_items (id, user_id, title, description, status, category, due_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    format!("{} Compliance", regulation.label()),
                    format!("Initial compliance setup for {}", regulation.label()),
                    ComplianceStatus::Pending.as_str(),
                    regulation.category().as_str(),
                    due.to_rfc3339(),
                ],
            )
            .await?;
        }
        tx.commit().await?;

        let mut items = Vec::with_capacity(ids.len());
        for id in &ids {
            items.push(self.get_compliance_item(id).await?);
        }
        Ok(items)
    }

    /// Fetch one of the signed-in user's compliance items by id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the item does not exist or belongs to
    /// another user.
    pub async fn get_compliance_item(&self, id: &str) -> Result<ComplianceItem, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM compliance_items WHERE id = ?1 AND user_id = ?2"),
                [id, self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        row_to_item(&row)
    }

    /// List the signed-in user's compliance items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn list_compliance_items(&self, limit: u32) -> Result<Vec<ComplianceItem>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM compliance_items WHERE user_id = ?1 \
                     ORDER BY created_at DESC, id LIMIT {limit}"
                ),
                [self.user_id()],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    /// Set a compliance item's status. Items move freely between states.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the item does not exist or belongs to
    /// another user.
    pub async fn set_compliance_status(
        &self,
        id: &str,
        status: ComplianceStatus,
    ) -> Result<ComplianceItem, DbError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE compliance_items SET status = ?1, updated_at = datetime('now')
                 WHERE id = ?2 AND user_id = ?3",
                libsql::params![status.as_str(), id, self.user_id()],
            )
            .await?;
        if affected == 0 {
            return Err(DbError::NoResult);
        }

        self.get_compliance_item(id).await
    }

    /// Number of compliance items the signed-in user has.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn count_compliance_items(&self) -> Result<u64, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT count(*) FROM compliance_items WHERE user_id = ?1",
                [self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or(0))
    }

    /// Status counts for the signed-in user as `(compliant, non_compliant, pending)`.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn compliance_status_counts(&self) -> Result<(u64, u64, u64), DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT status, count(*) FROM compliance_items WHERE user_id = ?1 GROUP BY status",
                [self.user_id()],
            )
            .await?;

        let (mut compliant, mut non_compliant, mut pending) = (0, 0, 0);
        while let Some(row) = rows.next().await? {
            let status: ComplianceStatus = enum_column(&row, 0)?;
            let count = u64::try_from(row.get::<i64>(1)?).unwrap_or(0);
            match status {
                ComplianceStatus::Compliant => compliant = count,
                ComplianceStatus::NonCompliant => non_compliant = count,
                ComplianceStatus::Pending => pending = count,
            }
        }
        Ok((compliant, non_compliant, pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_item_roundtrip() {
        let svc = test_service().await;

        let item = svc
            .create_compliance_item("Data mapping", "Map all personal data flows", Category::Gdpr, None)
            .await
            .unwrap();

        assert!(item.id.starts_with("cmp-"));
        assert_eq!(item.user_id, "user_t1");
        assert_eq!(item.title, "Data mapping");
        assert_eq!(item.status, ComplianceStatus::Pending);
        assert_eq!(item.category, Category::Gdpr);
        assert!(item.due_date.is_none());

        let fetched = svc.get_compliance_item(&item.id).await.unwrap();
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn regulations_seed_one_item_each() {
        let svc = test_service().await;

        let items = svc
            .create_compliance_items_for_regulations(&[Regulation::Gdpr, Regulation::Hipaa])
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "GDPR Compliance");
        assert_eq!(items[0].description, "Initial compliance setup for GDPR");
        assert_eq!(items[0].category, Category::Gdpr);
        assert_eq!(items[1].title, "HIPAA Compliance");
        assert_eq!(items[1].category, Category::Other);

        for item in &items {
            assert_eq!(item.status, ComplianceStatus::Pending);
            let due = item.due_date.expect("seeded items carry a due date");
            let days_out = (due - Utc::now()).num_days();
            assert!((29..=30).contains(&days_out), "due ~30 days out, got {days_out}");
        }
    }

    #[tokio::test]
    async fn empty_regulations_write_nothing() {
        let svc = test_service().await;

        let items = svc
            .create_compliance_items_for_regulations(&[])
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(svc.count_compliance_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_scoped_to_user() {
        let svc = test_service().await;
        svc.create_compliance_item("Own item", "", Category::Iso, None)
            .await
            .unwrap();

        svc.db()
            .conn()
            .execute(
                "INSERT INTO compliance_items (id, user_id, title) VALUES ('cmp-ffffffff', 'user_t2', 'Foreign item')",
                (),
            )
            .await
            .unwrap();

        let items = svc.list_compliance_items(10).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Own item");
    }

    #[tokio::test]
    async fn set_status_moves_freely() {
        let svc = test_service().await;
        let item = svc
            .create_compliance_item("Retention policy", "", Category::Gdpr, None)
            .await
            .unwrap();

        let compliant = svc
            .set_compliance_status(&item.id, ComplianceStatus::Compliant)
            .await
            .unwrap();
        assert_eq!(compliant.status, ComplianceStatus::Compliant);

        // No lifecycle lock: compliant may lapse back
        let lapsed = svc
            .set_compliance_status(&item.id, ComplianceStatus::NonCompliant)
            .await
            .unwrap();
        assert_eq!(lapsed.status, ComplianceStatus::NonCompliant);
    }

    #[tokio::test]
    async fn set_status_unknown_id() {
        let svc = test_service().await;
        let result = svc
            .set_compliance_status("cmp-00000000", ComplianceStatus::Compliant)
            .await;
        assert!(matches!(result, Err(DbError::NoResult)));
    }

    #[tokio::test]
    async fn status_counts_group_correctly() {
        let svc = test_service().await;
        let a = svc
            .create_compliance_item("A", "", Category::Gdpr, None)
            .await
            .unwrap();
        svc.create_compliance_item("B", "", Category::Ccpa, None)
            .await
            .unwrap();
        svc.create_compliance_item("C", "", Category::Iso, None)
            .await
            .unwrap();
        svc.set_compliance_status(&a.id, ComplianceStatus::Compliant)
            .await
            .unwrap();

        let (compliant, non_compliant, pending) = svc.compliance_status_counts().await.unwrap();
        assert_eq!(compliant, 1);
        assert_eq!(non_compliant, 0);
        assert_eq!(pending, 2);
        assert_eq!(svc.count_compliance_items().await.unwrap(), 3);
    }
}
