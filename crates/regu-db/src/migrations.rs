//! Schema migrations, embedded at compile time.
//!
//! Every statement is written to be idempotent (`IF NOT EXISTS`) so the
//! batch can run on every open, local or remote.

use crate::{ReguDb, error::DbError};

const MIGRATION_001_INITIAL: &str = include_str!("../migrations/001_initial.sql");

impl ReguDb {
    /// Apply all migrations to the connected database.
    pub(crate) async fn run_migrations(&self) -> Result<(), DbError> {
        tracing::debug!("applying schema migrations");
        self.conn
            .execute_batch(MIGRATION_001_INITIAL)
            .await
            .map_err(|e| DbError::Migration(e.to_string()))?;
        Ok(())
    }
}
