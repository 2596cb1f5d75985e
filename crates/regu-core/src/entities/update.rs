use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Severity};

/// A regulatory update processed by the summarization pipeline, stored with
/// the source text it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegulatoryUpdate {
    pub id: String,
    pub user_id: String,
    pub source_text: String,
    pub summary: String,
    pub category: Category,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}
