use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// List reports, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Generate a report and wait for it to finish.
    Generate {
        /// Report title.
        title: String,
    },
}
