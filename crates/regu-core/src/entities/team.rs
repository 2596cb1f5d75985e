use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TeamRole;

/// A member of one user's team. Append-only: no update or delete exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}
