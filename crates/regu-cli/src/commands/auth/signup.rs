use anyhow::bail;

use super::SessionResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::output::output;

pub async fn handle(
    args: &CredentialArgs,
    flags: &GlobalFlags,
    config: &regu_config::ReguConfig,
) -> anyhow::Result<()> {
    if !config.backend.is_configured() {
        bail!("auth signup: REGUNOVA_BACKEND__URL is not configured");
    }

    let claims = regu_auth::password_flow::sign_up(
        config.backend.base_url(),
        &config.backend.api_key,
        &args.email,
        &args.password,
    )
    .await?;

    output(
        &SessionResponse {
            authenticated: true,
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at.to_rfc3339(),
        },
        flags.format,
    )
}
