use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// A compliance alert surfaced to one user.
///
/// Alerts are created unread; the only mutation is marking a single alert read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
