use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, ComplianceStatus};

/// A single tracked compliance obligation for one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceItem {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub status: ComplianceStatus,
    pub category: Category,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
