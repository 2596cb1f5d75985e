use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in user, reduced to plain data.
///
/// Produced by `regu-auth`, consumed by `regu-db` and the CLI. Carries no
/// auth logic and makes no HTTP calls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// User ID (from the JWT `sub` claim). Scopes every query.
    pub user_id: String,
    /// Email address (from the JWT `email` claim), when present.
    pub email: Option<String>,
}
