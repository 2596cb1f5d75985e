//! Errors raised by the domain layer itself.
//!
//! Storage, auth, and network failures live in their own crates (`DbError`,
//! `AuthError`, and friends) and converge to `anyhow` at the CLI boundary.
//! What remains here is the rejection of bad input before it reaches any of
//! those layers.

use thiserror::Error;

/// A domain-level check rejected user-supplied data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was blank, an email was malformed, or a selection
    /// was empty. The message is already user-facing and prints as-is.
    #[error("{0}")]
    Validation(String),
}
