use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A company profile. One row per user: `id` equals the user id, and writes
/// are upserts keyed on it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub region: String,
    pub size: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
