mod list;
mod process;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UpdateCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &UpdateCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UpdateCommands::Process { text, file } => {
            process::run(text.as_deref(), file.as_deref(), ctx, flags).await
        }
        UpdateCommands::List { limit } => list::run(*limit, ctx, flags).await,
    }
}
