mod status;
mod submit;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OnboardCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &OnboardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OnboardCommands::Status => status::run(ctx, flags).await,
        OnboardCommands::Submit { step } => submit::run(step, ctx, flags).await,
    }
}
