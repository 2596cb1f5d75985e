//! Team member repository: an append-only roster.

use regu_core::entities::TeamMember;
use regu_core::enums::TeamRole;
use regu_core::ids::PREFIX_TEAM_MEMBER;
use regu_core::onboarding::TeamMemberDraft;

use crate::error::DbError;
use crate::helpers::{datetime_column, enum_column};
use crate::service::ReguService;

const SELECT_COLS: &str = "id, user_id, email, role, created_at";

fn row_to_member(row: &libsql::Row) -> Result<TeamMember, DbError> {
    Ok(TeamMember {
        id: row.get(0)?,
        user_id: row.get(1)?,
        email: row.get(2)?,
        role: enum_column(row, 3)?,
        created_at: datetime_column(row, 4)?,
    })
}

impl ReguService {
    /// Add a single member to the signed-in user's team.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the insert fails.
    pub async fn add_team_member(&self, email: &str, role: TeamRole) -> Result<TeamMember, DbError> {
        let id = self.db().generate_id(PREFIX_TEAM_MEMBER).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO team_members (id, user_id, email, role) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), self.user_id(), email, role.as_str()],
            )
            .await?;

        self.get_team_member(&id).await
    }

    /// Add several members at once, atomically.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if any insert fails; the transaction is rolled back.
    pub async fn add_team_members(
        &self,
        drafts: &[TeamMemberDraft],
    ) -> Result<Vec<TeamMember>, DbError> {
        let mut ids = Vec::with_capacity(drafts.len());
        for _ in drafts {
            ids.push(self.db().generate_id(PREFIX_TEAM_MEMBER).await?);
        }

        let tx = self.db().conn().transaction().await?;
        for (draft, id) in drafts.iter().zip(&ids) {
            tx.execute(
                "INSERT INTO team_members (id, user_id, email, role) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    draft.email.as_str(),
                    draft.role.as_str()
                ],
            )
            .await?;
        }
        tx.commit().await?;

        let mut members = Vec::with_capacity(ids.len());
        for id in &ids {
            members.push(self.get_team_member(id).await?);
        }
        Ok(members)
    }

    /// Fetch one of the signed-in user's team members by id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NoResult` if the member does not exist or belongs to
    /// another user's team.
    pub async fn get_team_member(&self, id: &str) -> Result<TeamMember, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM team_members WHERE id = ?1 AND user_id = ?2"),
                [id, self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        row_to_member(&row)
    }

    /// List the signed-in user's team, in roster (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn list_team_members(&self, limit: u32) -> Result<Vec<TeamMember>, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM team_members WHERE user_id = ?1 \
                     ORDER BY created_at, id LIMIT {limit}"
                ),
                [self.user_id()],
            )
            .await?;

        let mut members = Vec::new();
        while let Some(row) = rows.next().await? {
            members.push(row_to_member(&row)?);
        }
        Ok(members)
    }

    /// Number of members on the signed-in user's team.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails.
    pub async fn count_team_members(&self) -> Result<u64, DbError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT count(*) FROM team_members WHERE user_id = ?1",
                [self.user_id()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn add_member_roundtrip() {
        let svc = test_service().await;

        let member = svc
            .add_team_member("dana@example.com", TeamRole::Admin)
            .await
            .unwrap();

        assert!(member.id.starts_with("tm-"));
        assert_eq!(member.email, "dana@example.com");
        assert_eq!(member.role, TeamRole::Admin);
    }

    #[tokio::test]
    async fn add_members_batch() {
        let svc = test_service().await;

        let members = svc
            .add_team_members(&[
                TeamMemberDraft {
                    email: "a@example.com".into(),
                    role: TeamRole::Admin,
                },
                TeamMemberDraft {
                    email: "b@example.com".into(),
                    role: TeamRole::Member,
                },
                TeamMemberDraft {
                    email: "c@example.com".into(),
                    role: TeamRole::Viewer,
                },
            ])
            .await
            .unwrap();

        assert_eq!(members.len(), 3);
        assert_eq!(members[0].email, "a@example.com");
        assert_eq!(members[2].role, TeamRole::Viewer);
        assert_eq!(svc.count_team_members().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn roster_scoped_to_user() {
        let svc = test_service().await;
        svc.add_team_member("mine@example.com", TeamRole::Member)
            .await
            .unwrap();

        svc.db()
            .conn()
            .execute(
                "INSERT INTO team_members (id, user_id, email) VALUES ('tm-ffffffff', 'user_t2', 'foreign@example.com')",
                (),
            )
            .await
            .unwrap();

        let members = svc.list_team_members(10).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, "mine@example.com");
        assert_eq!(svc.count_team_members().await.unwrap(), 1);
    }
}
