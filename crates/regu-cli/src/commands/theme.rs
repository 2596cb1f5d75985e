use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::output::output;

#[derive(Serialize)]
struct ThemeResponse {
    dark: bool,
}

#[derive(Serialize)]
struct ThemeToggleResponse {
    dark: bool,
    saved_to: String,
}

/// Handle `rnv theme <subcommand>`. Config-only, so it runs before the
/// session gate.
pub fn handle(
    action: &ThemeCommands,
    flags: &GlobalFlags,
    config: &regu_config::ReguConfig,
) -> anyhow::Result<()> {
    match action {
        ThemeCommands::Show => output(&ThemeResponse { dark: config.theme.dark }, flags.format),
        ThemeCommands::Toggle => {
            let dark = !config.theme.dark;
            let path = regu_config::save_theme(dark)?;
            output(
                &ThemeToggleResponse {
                    dark,
                    saved_to: path.display().to_string(),
                },
                flags.format,
            )
        }
    }
}
