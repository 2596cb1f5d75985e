mod list;
mod read;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlertCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &AlertCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AlertCommands::List { unread, limit } => list::run(*unread, *limit, ctx, flags).await,
        AlertCommands::Read { id } => read::run(id, ctx, flags).await,
    }
}
