//! Service layer scoping database operations to an authenticated user.
//!
//! `ReguService` wraps `ReguDb` (raw database access) together with the
//! `AuthIdentity` of the signed-in user. All repo methods are implemented
//! as `impl ReguService` blocks and filter every query on `user_id`, so a
//! service handle can never read or write another user's rows.

use regu_core::identity::AuthIdentity;

use crate::ReguDb;
use crate::error::DbError;

/// Orchestrates user-scoped database reads and writes.
pub struct ReguService {
    db: ReguDb,
    identity: AuthIdentity,
}

impl ReguService {
    /// Open a service over a local database file.
    ///
    /// # Arguments
    ///
    /// * `db_path`: Path to the libSQL database file, or `":memory:"` for tests.
    /// * `identity`: The authenticated user all operations are scoped to.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, identity: AuthIdentity) -> Result<Self, DbError> {
        let db = ReguDb::open_local(db_path).await?;
        Ok(Self { db, identity })
    }

    /// Create a service backed by a remote Turso database.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the connection cannot be established.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        identity: AuthIdentity,
    ) -> Result<Self, DbError> {
        let db = ReguDb::open_remote(url, auth_token).await?;
        Ok(Self { db, identity })
    }

    /// Create from an existing `ReguDb` (for testing).
    #[must_use]
    pub const fn from_db(db: ReguDb, identity: AuthIdentity) -> Self {
        Self { db, identity }
    }

    /// The database handle behind the repositories.
    #[must_use]
    pub const fn db(&self) -> &ReguDb {
        &self.db
    }

    /// The identity all operations are scoped to.
    #[must_use]
    pub const fn identity(&self) -> &AuthIdentity {
        &self.identity
    }

    /// The id of the signed-in user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.identity.user_id
    }
}
