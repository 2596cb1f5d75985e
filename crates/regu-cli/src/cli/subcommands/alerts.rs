use clap::Subcommand;

/// Alert feed commands. Alerts are created by backend ingestion; the CLI
/// reads the feed and flips read state.
#[derive(Clone, Debug, Subcommand)]
pub enum AlertCommands {
    /// List alerts, newest first.
    List {
        /// Only show unread alerts.
        #[arg(long)]
        unread: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark one alert read.
    Read { id: String },
}
