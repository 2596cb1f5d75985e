mod generate;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::List { limit } => list::run(*limit, ctx, flags).await,
        ReportCommands::Generate { title } => generate::run(title, ctx, flags).await,
    }
}
