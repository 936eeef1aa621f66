//! Spinners for long-running operations
//!
//! Thin wrapper around `indicatif` giving every spinner the same style. A
//! spinner created with `enabled = false` is hidden and ignores all calls, so
//! callers never branch on quiet or non-interactive modes themselves.
//!
//! # Examples
//!
//! ```rust
//! use sls_deps::utils::progress::Spinner;
//!
//! let spinner = Spinner::new("Installing shared dependencies...", false);
//! // Long running operation
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Environment variable that disables progress output regardless of flags.
pub const NO_PROGRESS_ENV: &str = "SLS_DEPS_NO_PROGRESS";

fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

/// An indeterminate progress spinner.
#[derive(Clone)]
pub struct Spinner {
    inner: IndicatifBar,
}

impl Spinner {
    /// Creates a spinner showing `msg`.
    ///
    /// The spinner animates every 100ms using Unicode Braille patterns
    /// (`⠋ ⠙ ⠹ ⠸ ⠼ ⠴ ⠦ ⠧ ⠇ ⠏`). It is drawn on stderr so it never
    /// interleaves with status lines on stdout.
    pub fn new(msg: impl Into<String>, enabled: bool) -> Self {
        let bar = if !enabled || is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(msg.into());
        Self {
            inner: bar,
        }
    }

    /// Stops the spinner and removes it from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}
