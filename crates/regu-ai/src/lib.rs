//! # regu-ai
//!
//! Regulatory-update summarization for ReguNova.
//!
//! Sends raw regulatory text to an OpenAI completion model with a fixed
//! compliance-analyst preamble, parses the strict-JSON reply into a
//! summary plus category and severity classifications, and persists the
//! result as a [`regu_core::entities::RegulatoryUpdate`].
//!
//! Classification values are parsed tolerantly: unknown categories fall
//! back to `other` and unknown severities to `medium`, the same defaults
//! the schema applies. A reply without a usable summary is an error.

pub mod error;
pub mod summarizer;

pub use error::AiError;
pub use summarizer::{UpdateAnalysis, process_update, summarize};
