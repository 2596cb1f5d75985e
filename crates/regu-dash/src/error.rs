//! Error types for dashboard and onboarding orchestration.

use thiserror::Error;

/// Errors from onboarding, feed, and report generation operations.
#[derive(Debug, Error)]
pub enum DashError {
    /// A step draft failed validation. Nothing was written.
    #[error(transparent)]
    Validation(#[from] regu_core::errors::CoreError),

    /// Error from the libSQL storage layer.
    #[error("database error: {0}")]
    Db(#[from] regu_db::error::DbError),

    /// A background generation task was cancelled or panicked.
    #[error("report generation task failed: {0}")]
    Generation(String),
}
