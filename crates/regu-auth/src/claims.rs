use base64::Engine as _;
use chrono::{DateTime, Utc};
use regu_core::identity::AuthIdentity;

use crate::error::AuthError;

/// Decoded session JWT claims.
///
/// Produced by [`decode`] from a backend-issued token, consumed by CLI
/// commands and `AppContext`. Decoding is local: the backend signed the
/// token, the client only reads its payload.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Raw JWT string (for bearer-authenticated backend calls).
    pub raw_jwt: String,
    /// User ID (`sub` claim). Scopes every query.
    pub user_id: String,
    /// Email address (`email` claim), when present.
    pub email: Option<String>,
    /// Expiry instant taken from the `exp` claim.
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Strip down to the identity fields other crates need.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }

    /// True when the token has expired or will within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

/// Decode session claims from a JWT payload without signature verification.
///
/// The client never holds the signing key; it trusts tokens handed back by
/// the backend's sign-in endpoint and only reads `sub`, `email`, and `exp`.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `sub`/`exp`
/// claims are missing or cannot be parsed.
pub fn decode(jwt: &str) -> Result<SessionClaims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;

    let user_id = value["sub"]
        .as_str()
        .ok_or_else(|| AuthError::Other("missing sub claim".into()))?
        .to_string();
    let email = value["email"].as_str().map(String::from);
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))?;

    Ok(SessionClaims {
        raw_jwt: jwt.to_string(),
        user_id,
        email,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn make_jwt(sub: &str, email: Option<&str>, exp: i64) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let body = match email {
            Some(email) => format!(r#"{{"sub":"{sub}","email":"{email}","exp":{exp}}}"#),
            None => format!(r#"{{"sub":"{sub}","exp":{exp}}}"#),
        };
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(body);
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decode_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt("user_123", Some("dana@example.com"), future_exp);
        let claims = decode(&jwt).expect("should decode");
        assert_eq!(claims.user_id, "user_123");
        assert_eq!(claims.email.as_deref(), Some("dana@example.com"));
        assert_eq!(claims.expires_at.timestamp(), future_exp);
        assert_eq!(claims.raw_jwt, jwt);
    }

    #[test]
    fn decode_without_email() {
        let jwt = make_jwt("user_123", None, Utc::now().timestamp() + 3600);
        let claims = decode(&jwt).expect("should decode");
        assert!(claims.email.is_none());
    }

    #[test]
    fn decode_invalid_format() {
        let result = decode("not-a-jwt");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid JWT format")
        );
    }

    #[test]
    fn decode_missing_sub_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#);
        let jwt = format!("{header}.{payload}.sig");

        let result = decode(&jwt);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing sub claim"));
    }

    #[test]
    fn decode_bad_base64() {
        let result = decode("header.!!!invalid!!!.signature");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base64 decode failed")
        );
    }

    #[test]
    fn to_identity_maps_fields() {
        let jwt = make_jwt("user_123", Some("dana@example.com"), Utc::now().timestamp() + 3600);
        let identity = decode(&jwt).unwrap().to_identity();
        assert_eq!(identity.user_id, "user_123");
        assert_eq!(identity.email.as_deref(), Some("dana@example.com"));
    }

    #[test]
    fn is_near_expiry_boundaries() {
        let soon = decode(&make_jwt("u", None, Utc::now().timestamp() + 30)).unwrap();
        assert!(soon.is_near_expiry(60));

        let later = decode(&make_jwt("u", None, Utc::now().timestamp() + 3600)).unwrap();
        assert!(!later.is_near_expiry(60));

        let past = decode(&make_jwt("u", None, Utc::now().timestamp() - 10)).unwrap();
        assert!(past.is_near_expiry(60));
    }
}
