//! Process-wide presentation preferences.
//!
//! Resolved once at startup from the global flags plus the terminal
//! environment, then read wherever rendering decisions are made.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let tty = std::io::stdout().is_terminal();
    let _ = UI_PREFS.set(UiPrefs {
        table_color: color_enabled(flags, tty),
        progress: progress_enabled(flags, tty),
        term_width: detect_width(),
    });
}

/// Current preferences; everything stays off until [`init`] has run.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Color only ever applies to table output; JSON and raw stay clean for
/// machine consumers no matter what `--color` says.
fn color_enabled(flags: &GlobalFlags, tty: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => tty && !flags.quiet && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Spinners draw on stderr, so an explicit `on` works even while JSON goes
/// to stdout; auto keeps JSON pipelines completely quiet.
fn progress_enabled(flags: &GlobalFlags, tty: bool) -> bool {
    if !tty || flags.quiet {
        return false;
    }
    match flags.progress {
        ProgressMode::On => true,
        ProgressMode::Off => false,
        ProgressMode::Auto => flags.format != OutputFormat::Json,
    }
}

fn detect_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.parse().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::{color_enabled, progress_enabled};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color: ColorMode::Auto,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn color_never_wins_over_table_format() {
        let mut f = flags(OutputFormat::Table);
        f.color = ColorMode::Never;
        assert!(!color_enabled(&f, true));
    }

    #[test]
    fn color_always_still_requires_table_output() {
        let mut f = flags(OutputFormat::Json);
        f.color = ColorMode::Always;
        assert!(!color_enabled(&f, false));
        f.format = OutputFormat::Table;
        assert!(color_enabled(&f, false));
    }

    #[test]
    fn progress_auto_skips_json_pipelines() {
        assert!(!progress_enabled(&flags(OutputFormat::Json), true));
        assert!(progress_enabled(&flags(OutputFormat::Table), true));
    }

    #[test]
    fn progress_on_is_honored_for_json_when_interactive() {
        let mut f = flags(OutputFormat::Json);
        f.progress = ProgressMode::On;
        assert!(progress_enabled(&f, true));
        assert!(!progress_enabled(&f, false));
    }

    #[test]
    fn quiet_disables_progress_entirely() {
        let mut f = flags(OutputFormat::Table);
        f.progress = ProgressMode::On;
        f.quiet = true;
        assert!(!progress_enabled(&f, true));
    }
}
