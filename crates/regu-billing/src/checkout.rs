//! Checkout-session creation against the billing backend.

use std::time::Duration;

use serde::Deserialize;

use crate::error::BillingError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// A hosted checkout session created by the billing backend.
///
/// The backend speaks camelCase (`sessionId`); the `url` is the hosted
/// payment page the user finishes the subscription on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
    pub url: String,
}

/// Ask the billing backend for a hosted checkout session.
///
/// POSTs `{ priceId }` with the session bearer token and expects
/// `{ sessionId, url }` back.
///
/// # Errors
///
/// Returns [`BillingError::NotConfigured`] when `checkout_url` is empty,
/// [`BillingError::Rejected`] on a non-success status, and
/// [`BillingError::MalformedResponse`] when the body does not parse.
pub async fn create_checkout_session(
    checkout_url: &str,
    access_token: &str,
    price_id: &str,
) -> Result<CheckoutSession, BillingError> {
    if checkout_url.is_empty() {
        return Err(BillingError::NotConfigured);
    }

    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| BillingError::Request(format!("http client: {e}")))?;

    let response = client
        .post(checkout_url)
        .bearer_auth(access_token)
        .json(&serde_json::json!({ "priceId": price_id }))
        .send()
        .await
        .map_err(|e| BillingError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(BillingError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    let session: CheckoutSession = response
        .json()
        .await
        .map_err(|e| BillingError::MalformedResponse(e.to_string()))?;
    if session.session_id.is_empty() || session.url.is_empty() {
        return Err(BillingError::MalformedResponse(
            "session id or url missing".to_string(),
        ));
    }

    tracing::debug!(session_id = %session.session_id, "checkout session created");
    Ok(session)
}

/// Open the checkout URL in the system browser.
///
/// Returns whether the browser opened; callers print the URL themselves
/// when it did not, so headless sessions can still finish checkout.
pub fn open_checkout(url: &str) -> bool {
    match open::that(url) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, "could not open a browser for checkout");
            false
        }
    }
}
