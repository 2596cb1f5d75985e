use clap::Subcommand;

/// Team membership commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeamCommands {
    /// List team members.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Add a team member.
    Add {
        /// Email address of the member.
        email: String,
        /// Role: admin, member, viewer.
        #[arg(long, default_value = "member")]
        role: String,
    },
}
