//! Retry for transient Turso errors.
//!
//! A remote Turso node occasionally refuses a statement while the platform
//! recycles or provisions it. Those refusals arrive as Hrana-level 400s
//! carrying one of two known messages, and the same statement succeeds a
//! moment later. Remote writes therefore run through [`with_retries`];
//! local files never see these errors, which is why `ReguDb::is_remote`
//! gates the path.

use std::time::Duration;

use crate::error::DbError;

/// Tuning for the backoff loop in [`with_retries`].
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, counting the first try.
    pub max_attempts: u32,
    /// Sleep before the first retry; doubles on each further one.
    pub base_delay: Duration,
    /// Ceiling the doubling stops at.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

/// Whether `e` is one of the known self-resolving Turso refusals.
///
/// Only these two message fragments count; a genuine SQL or constraint
/// error must fail on the first attempt.
pub fn is_transient_turso_error(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
}

/// Run a fallible libSQL operation, retrying transient Turso errors
/// with exponential backoff.
///
/// Non-transient errors and exhausted attempts propagate immediately.
///
/// # Errors
///
/// Returns the last `libsql::Error` (converted to `DbError`) once
/// attempts are exhausted, or the first non-transient error.
pub async fn with_retries<T, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, DbError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, libsql::Error>>,
{
    let mut delay = config.base_delay;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_transient_turso_error(&e) && attempt < config.max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = config.max_attempts,
                    ?delay,
                    error = %e,
                    "transient database error, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(config.max_delay);
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
