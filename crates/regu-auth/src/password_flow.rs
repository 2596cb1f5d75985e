use std::time::Duration;

use serde::Deserialize;

use crate::claims::SessionClaims;
use crate::error::AuthError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Token payload returned by the backend's sign-in and sign-up endpoints.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Sign in with email and password.
///
/// 1. POST credentials to `{base_url}/auth/sign-in`
/// 2. Decode the returned JWT into session claims
/// 3. Store the token (keyring, with file fallback)
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on a 400/401/403 response and
/// `AuthError::SignInFailed` for transport or decoding failures.
pub async fn sign_in(
    base_url: &str,
    api_key: &str,
    email: &str,
    password: &str,
) -> Result<SessionClaims, AuthError> {
    let token = request_token(
        &format!("{base_url}/auth/sign-in"),
        api_key,
        email,
        password,
        AuthError::SignInFailed,
    )
    .await?;

    let claims = crate::claims::decode(&token)?;
    crate::token_store::store(&token)?;
    tracing::debug!(user_id = %claims.user_id, "signed in");
    Ok(claims)
}

/// Create an account, then persist the session it returns.
///
/// The backend signs the new user in as part of sign-up, so the response
/// shape matches [`sign_in`].
///
/// # Errors
///
/// Returns `AuthError::SignUpFailed` if the account cannot be created.
pub async fn sign_up(
    base_url: &str,
    api_key: &str,
    email: &str,
    password: &str,
) -> Result<SessionClaims, AuthError> {
    let token = request_token(
        &format!("{base_url}/auth/sign-up"),
        api_key,
        email,
        password,
        AuthError::SignUpFailed,
    )
    .await?;

    let claims = crate::claims::decode(&token)?;
    crate::token_store::store(&token)?;
    tracing::debug!(user_id = %claims.user_id, "account created");
    Ok(claims)
}

async fn request_token(
    url: &str,
    api_key: &str,
    email: &str,
    password: &str,
    wrap: impl Fn(String) -> AuthError,
) -> Result<String, AuthError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| wrap(format!("http client: {e}")))?;

    let mut request = client.post(url).json(&serde_json::json!({
        "email": email,
        "password": password,
    }));
    if !api_key.is_empty() {
        request = request.header("x-api-key", api_key);
    }

    let response = request
        .send()
        .await
        .map_err(|e| wrap(format!("request to {url}: {e}")))?;

    let status = response.status();
    if status == reqwest::StatusCode::BAD_REQUEST
        || status == reqwest::StatusCode::UNAUTHORIZED
        || status == reqwest::StatusCode::FORBIDDEN
    {
        return Err(AuthError::InvalidCredentials);
    }
    let response = response
        .error_for_status()
        .map_err(|e| wrap(format!("backend returned {status}: {e}")))?;

    let body: TokenResponse = response
        .json()
        .await
        .map_err(|e| wrap(format!("malformed token response: {e}")))?;
    if body.access_token.is_empty() {
        return Err(wrap("backend returned an empty access token".into()));
    }
    Ok(body.access_token)
}
