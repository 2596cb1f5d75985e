use std::path::PathBuf;

use clap::Subcommand;

/// Regulatory update commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UpdateCommands {
    /// Summarize and classify regulatory text, then store the result.
    Process {
        /// The regulatory text to analyze.
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// Read the text from a file instead.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List processed updates, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
