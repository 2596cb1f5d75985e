use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AlertCommands, AuthCommands, ComplianceCommands, OnboardCommands, ProfileCommands,
    ReportCommands, TeamCommands, ThemeCommands, UpdateCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Guided onboarding wizard.
    Onboard {
        #[command(subcommand)]
        action: OnboardCommands,
    },
    /// Onboarding progress, compliance overview, and recent alerts.
    Dashboard,
    /// Compliance items.
    Compliance {
        #[command(subcommand)]
        action: ComplianceCommands,
    },
    /// Alert feed.
    Alerts {
        #[command(subcommand)]
        action: AlertCommands,
    },
    /// Compliance reports.
    Reports {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Team membership.
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// Company profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Regulatory update summarization.
    Updates {
        #[command(subcommand)]
        action: UpdateCommands,
    },
    /// Start a subscription checkout in the browser.
    Subscribe(SubscribeArgs),
    /// Color theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}

/// Arguments for `rnv subscribe`.
#[derive(Clone, Debug, Args)]
pub struct SubscribeArgs {
    /// Price to subscribe to (defaults to the configured price id).
    #[arg(long)]
    pub price_id: Option<String>,
    /// Print the checkout URL instead of opening a browser.
    #[arg(long)]
    pub no_browser: bool,
}
