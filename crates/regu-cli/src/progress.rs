use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// A spinner shown while a command waits on remote work.
///
/// Quiet mode, JSON auto mode, and non-tty sessions disable it; every
/// method is then a no-op.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
