//! Shared test utilities for regu-db tests.

pub(crate) mod helpers {
    use regu_core::identity::AuthIdentity;

    use crate::ReguDb;
    use crate::service::ReguService;

    /// Create an in-memory `ReguService` scoped to a fixed test user.
    pub async fn test_service() -> ReguService {
        test_service_with_identity(AuthIdentity {
            user_id: "user_t1".to_string(),
            email: Some("tester@example.com".to_string()),
        })
        .await
    }

    /// Create an in-memory `ReguService` with a specific identity (for scoping tests).
    pub async fn test_service_with_identity(identity: AuthIdentity) -> ReguService {
        let db = ReguDb::open_local(":memory:").await.unwrap();
        ReguService::from_db(db, identity)
    }
}
