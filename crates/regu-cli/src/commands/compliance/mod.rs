mod add;
mod list;
mod set_status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ComplianceCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &ComplianceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ComplianceCommands::List { status, limit } => {
            list::run(status.as_deref(), *limit, ctx, flags).await
        }
        ComplianceCommands::Add {
            title,
            description,
            category,
            due_days,
        } => add::run(title, description.as_deref(), category, *due_days, ctx, flags).await,
        ComplianceCommands::SetStatus { id, status } => {
            set_status::run(id, status, ctx, flags).await
        }
    }
}
