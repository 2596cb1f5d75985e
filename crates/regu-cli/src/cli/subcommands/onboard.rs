use clap::Subcommand;

/// Onboarding wizard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OnboardCommands {
    /// Show which steps are complete and which comes next.
    Status,
    /// Submit one wizard step.
    Submit {
        #[command(subcommand)]
        step: OnboardStepCommands,
    },
}

/// One subcommand per wizard step; each carries that step's fields.
#[derive(Clone, Debug, Subcommand)]
pub enum OnboardStepCommands {
    /// Company profile step.
    Profile {
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        size: String,
    },
    /// Regulation assessment step.
    Assessment {
        /// Regulations to cover: gdpr, ccpa, hipaa, sox, iso27001.
        regulations: Vec<String>,
    },
    /// Document templates step.
    Templates {
        /// Template kinds, e.g. privacy_policy, cookie_policy.
        templates: Vec<String>,
    },
    /// Team invitation step.
    Team {
        /// Members as `email` or `email:role` entries.
        members: Vec<String>,
    },
}
