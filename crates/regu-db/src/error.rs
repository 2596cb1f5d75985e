//! Failure modes of the storage layer.
//!
//! Raw `libsql::Error` values pass through unchanged; the remaining variants
//! cover situations the repositories and read helpers detect themselves,
//! such as missing rows, unreadable stored values, and disallowed report
//! transitions.

use thiserror::Error;

/// Error returned by `ReguDb` and the repository methods built on it.
#[derive(Debug, Error)]
pub enum DbError {
    /// A statement ran but its result could not be used, typically a stored
    /// value that no longer parses (bad timestamp, retired enum label).
    #[error("query error: {0}")]
    Query(String),

    /// The embedded migration batch did not apply cleanly.
    #[error("migration error: {0}")]
    Migration(String),

    /// A lookup that must produce a row produced none. Queries are scoped
    /// to the session user, so another user's `id` looks missing too.
    #[error("no matching row")]
    NoResult,

    /// The requested write is not allowed from the row's current state,
    /// such as finalizing a report that is no longer `pending`.
    #[error("{0}")]
    InvalidState(String),

    /// Error surfaced by the libSQL driver itself.
    #[error(transparent)]
    LibSql(#[from] libsql::Error),
}
