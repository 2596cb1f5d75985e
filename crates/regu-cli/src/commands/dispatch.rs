use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Onboard { action } => commands::onboard::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Compliance { action } => commands::compliance::handle(&action, ctx, flags).await,
        Commands::Alerts { action } => commands::alerts::handle(&action, ctx, flags).await,
        Commands::Reports { action } => commands::reports::handle(&action, ctx, flags).await,
        Commands::Team { action } => commands::team::handle(&action, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Updates { action } => commands::updates::handle(&action, ctx, flags).await,
        Commands::Subscribe(args) => commands::subscribe::handle(&args, ctx, flags).await,
        Commands::Auth { .. } | Commands::Theme { .. } => {
            unreachable!("auth and theme are pre-dispatched in main")
        }
    }
}
