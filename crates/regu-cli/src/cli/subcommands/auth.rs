use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(CredentialArgs),
    /// Create an account and sign in.
    Signup(CredentialArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    /// Account email address.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}
