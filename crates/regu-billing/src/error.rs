//! Error types for billing operations.

use thiserror::Error;

/// Errors from checkout-session creation.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Checkout endpoint is not configured.
    #[error("billing is not configured; set the checkout url in config")]
    NotConfigured,

    /// Transport-level failure reaching the billing backend.
    #[error("checkout request failed: {0}")]
    Request(String),

    /// The billing backend rejected the request.
    #[error("billing backend returned {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The response body was not the expected session payload.
    #[error("malformed checkout response: {0}")]
    MalformedResponse(String),
}
