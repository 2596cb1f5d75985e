//! # regu-db
//!
//! libSQL database operations for ReguNova compliance data.
//!
//! Handles all relational state: profiles, compliance items, alerts, reports,
//! team members, and regulatory updates. Every row is scoped to a user; every
//! query filters on the authenticated user's id.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29): local file databases
//! for development and tests, remote Turso databases in production.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;

use error::DbError;
use libsql::Builder;

/// Connection handle shared by every repository.
///
/// Owns the libSQL database plus one connection and knows whether that
/// connection is remote (which decides retry behavior). Row-level CRUD
/// lives on [`service::ReguService`]; this type only opens, migrates,
/// and mints IDs.
pub struct ReguDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl ReguDb {
    /// Open a local-only database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DbError> {
        tracing::debug!(path, "opening local database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let regu_db = Self {
            db,
            conn,
            remote: false,
        };
        regu_db.run_migrations().await?;
        Ok(regu_db)
    }

    /// Open a remote Turso database.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DbError> {
        tracing::debug!(url, "opening remote database");
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let regu_db = Self {
            db,
            conn,
            remote: true,
        };
        regu_db.run_migrations().await?;
        Ok(regu_db)
    }

    /// The raw libSQL connection, for queries the repositories don't cover.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Returns whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Mint a fresh prefixed ID such as `"cmp-a3f8b2c1"`.
    ///
    /// The random half comes from the database's own `randomblob(4)`, so
    /// local and remote connections draw from the same format.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DbError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DbError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
pub(crate) mod test_support;
