mod login;
mod logout;
mod signup;
mod status;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Session summary printed after login and signup.
#[derive(Serialize)]
struct SessionResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: String,
}

/// Handle `rnv auth <subcommand>`. Runs before the session gate.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &regu_config::ReguConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Signup(args) => signup::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}
