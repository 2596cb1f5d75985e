use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Argument parser for the `rnv` binary.
#[derive(Debug, Parser)]
#[command(name = "rnv", version, about = "ReguNova - compliance workspace CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as json, table, or raw text
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Cap the number of rows a listing returns
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Suppress progress output and hints
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color in table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress indicators: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Copy the global flags into the shape command handlers take.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}
