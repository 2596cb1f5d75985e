mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeamCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &TeamCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TeamCommands::List { limit } => list::run(*limit, ctx, flags).await,
        TeamCommands::Add { email, role } => add::run(email, role, ctx, flags).await,
    }
}
