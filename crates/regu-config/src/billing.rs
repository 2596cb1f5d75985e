//! Billing provider configuration.

use serde::{Deserialize, Serialize};

/// Default subscription price identifier.
fn default_price_id() -> String {
    "price_monthly_subscription".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BillingConfig {
    /// Checkout-session endpoint. Empty means derive it from the backend URL.
    #[serde(default)]
    pub checkout_url: String,

    /// Price identifier sent when creating a checkout session.
    #[serde(default = "default_price_id")]
    pub price_id: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            checkout_url: String::new(),
            price_id: default_price_id(),
        }
    }
}

impl BillingConfig {
    /// Resolve the checkout endpoint, falling back to the conventional path
    /// under the backend base URL.
    pub fn resolve_checkout_url(&self, backend_base_url: &str) -> String {
        if self.checkout_url.is_empty() {
            format!("{backend_base_url}/functions/create-checkout-session")
        } else {
            self.checkout_url.clone()
        }
    }
}
