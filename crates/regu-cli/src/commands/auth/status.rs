use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source =
        regu_auth::token_store::detect_token_source().map(|source| source.to_string());

    let response = match regu_auth::resolve_session() {
        Ok(Some(claims)) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(claims.user_id),
            email: claims.email,
            expires_at: Some(claims.expires_at.to_rfc3339()),
            token_source,
            note: None,
        },
        Ok(None) => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            expires_at: None,
            token_source,
            note: Some("no valid session; run `rnv auth login`".to_owned()),
        },
        Err(error) => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            expires_at: None,
            token_source,
            note: Some(error.to_string()),
        },
    };
    output(&response, flags.format)
}
