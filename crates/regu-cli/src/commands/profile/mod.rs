mod set;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => show::run(ctx, flags).await,
        ProfileCommands::Set {
            company_name,
            industry,
            region,
            size,
        } => set::run(company_name, industry, region, size, ctx, flags).await,
    }
}
