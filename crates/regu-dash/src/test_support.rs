//! Shared test utilities for regu-dash tests.

pub(crate) mod helpers {
    use regu_core::identity::AuthIdentity;
    use regu_db::ReguDb;
    use regu_db::service::ReguService;

    /// Create an in-memory `ReguService` scoped to a fixed test user.
    pub async fn test_service() -> ReguService {
        let db = ReguDb::open_local(":memory:").await.unwrap();
        ReguService::from_db(
            db,
            AuthIdentity {
                user_id: "user_t1".to_string(),
                email: Some("tester@example.com".to_string()),
            },
        )
    }

    /// Drop a table so operations touching it fail, simulating a backend
    /// that answers some queries and rejects others.
    pub async fn break_table(service: &ReguService, table: &str) {
        service
            .db()
            .conn()
            .execute(&format!("DROP TABLE {table}"), ())
            .await
            .unwrap();
    }
}
