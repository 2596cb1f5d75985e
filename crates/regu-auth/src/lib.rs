//! # regu-auth
//!
//! Credential authentication for the ReguNova CLI.
//!
//! Provides password sign-in/sign-up against the backend (`reqwest`), local
//! JWT claim decoding, OS keychain token storage (`keyring`) with env and
//! file fallbacks, and session lifecycle checks.

pub mod claims;
pub mod error;
pub mod password_flow;
pub mod session;
pub mod token_store;

pub use claims::SessionClaims;
pub use error::AuthError;

/// The raw session token from the highest-priority store that has one
/// (keyring first, then the environment, then the credentials file).
///
/// No decoding happens here; [`resolve_session`] returns checked claims.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Decode the stored session, if any.
///
/// `Ok(None)` means no usable session: nothing stored, or a token within
/// the expiry margin.
///
/// # Errors
///
/// Returns `AuthError` if a stored token is malformed.
pub fn resolve_session() -> Result<Option<SessionClaims>, AuthError> {
    session::check_stored_token()
}

/// Drop the session from every store it was written to.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be
/// removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
