use crate::claims::SessionClaims;
use crate::error::AuthError;

const EXPIRY_BUFFER_SECS: i64 = 60;

/// Decode whatever token is stored and keep it only while it has life left.
///
/// `Ok(None)` covers both "nothing stored" and "stored but expired or about
/// to expire"; callers treat those the same and send the user to
/// `rnv auth login`.
///
/// # Errors
///
/// Returns `AuthError` only for a token that cannot be decoded at all.
pub fn check_stored_token() -> Result<Option<SessionClaims>, AuthError> {
    let Some(jwt) = crate::token_store::load() else {
        return Ok(None);
    };

    let claims = crate::claims::decode(&jwt)?;
    if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
        tracing::warn!(
            expires_at = %claims.expires_at,
            "session expires within {EXPIRY_BUFFER_SECS}s; sign in again with `rnv auth login`",
        );
        return Ok(None);
    }

    Ok(Some(claims))
}
