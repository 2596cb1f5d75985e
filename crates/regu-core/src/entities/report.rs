use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReportStatus;

/// A generated (or generating) compliance report.
///
/// Inserted as `pending` with no download reference; finalization sets
/// `generated` plus `download_url` and `generated_at` in one update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub status: ReportStatus,
    pub download_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub generated_at: Option<DateTime<Utc>>,
}
