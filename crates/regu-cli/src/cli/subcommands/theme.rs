use clap::Subcommand;

/// Theme preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme.
    Show,
    /// Flip between dark and light and persist the choice.
    Toggle,
}
