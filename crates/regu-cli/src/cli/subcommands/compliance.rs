use clap::Subcommand;

/// Compliance item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ComplianceCommands {
    /// List compliance items with an overall summary.
    List {
        /// Filter by status: compliant, non_compliant, pending.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a compliance item.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Category: gdpr, ccpa, iso, other.
        #[arg(long, default_value = "other")]
        category: String,
        /// Due date this many days from now.
        #[arg(long)]
        due_days: Option<i64>,
    },
    /// Move an item to a new status.
    SetStatus {
        id: String,
        /// New status: compliant, non_compliant, pending.
        status: String,
    },
}
