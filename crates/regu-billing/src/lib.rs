//! # regu-billing
//!
//! Checkout-session creation for ReguNova subscriptions.
//!
//! The billing backend owns pricing and payment; this crate only asks it
//! for a hosted checkout session and hands the session URL to the user's
//! browser. When the browser cannot be opened the caller prints the URL
//! instead, so headless sessions can still subscribe.

pub mod checkout;
pub mod error;

pub use checkout::{CheckoutSession, create_checkout_session, open_checkout};
pub use error::BillingError;
