//! # regu-dash
//!
//! Dashboard and onboarding orchestration for ReguNova.
//!
//! Sits between the CLI and regu-db, composing repository calls into the
//! screens the product actually shows:
//! - Onboarding: concurrent existence probes, step submission, completion
//!   derived fresh on every read (never stored).
//! - Dashboard: one call assembling compliance posture, alert counts, and
//!   the alert feed, degrading section by section on backend failure.
//! - Feeds: loaded snapshots of alerts, compliance items, and reports that
//!   patch single entries in place on mutation instead of refetching.
//! - Report generation: two-phase pending/finalize flow with a background
//!   task and a [`tokio::sync::Notify`] refresh signal for watchers.

pub mod alerts;
pub mod compliance;
pub mod dashboard;
pub mod error;
pub mod onboarding;
pub mod reports;

#[cfg(test)]
pub(crate) mod test_support;

pub use alerts::AlertFeed;
pub use compliance::ComplianceFeed;
pub use dashboard::load_dashboard;
pub use error::DashError;
pub use onboarding::{load_snapshot, onboarding_status, submit_step};
pub use reports::{generate_report, PendingGeneration, ReportFeed};
