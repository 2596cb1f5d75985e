use clap::Subcommand;

/// Company profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the stored profile.
    Show,
    /// Create or replace the profile.
    Set {
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        size: String,
    },
}
