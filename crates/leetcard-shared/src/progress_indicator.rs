//! Loading indicator shown while the stats fetch is pending.
//!
//! Pure UX layer: spinner failures never block the fetch, and the spinner
//! is always cleared before a card is printed, so the loading view never
//! coexists with a result view.
//!
//! TTY-aware: piped output gets a single plain line instead of animation
//! frames. Respects `NO_COLOR`.

use std::io::IsTerminal;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner with timing, disabled automatically outside a TTY.
pub struct ProgressIndicator {
    spinner: Option<ProgressBar>,
    start_time: Instant,
    enabled: bool,
}

impl ProgressIndicator {
    pub fn new(message: &str) -> Self {
        let start_time = Instant::now();

        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let enabled = is_tty && !no_color;

        let spinner = if enabled {
            let pb = ProgressBar::new_spinner();
            let style = ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}");
            if let Ok(style) = style {
                pb.set_style(style);
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(std::time::Duration::from_millis(80));
            Some(pb)
        } else {
            println!("... {}", message);
            None
        };

        Self {
            spinner,
            start_time,
            enabled,
        }
    }

    /// Clear the spinner line. Must be called before printing a card.
    pub fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Seconds since the indicator was created.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Whether the animated spinner is active (TTY, no NO_COLOR).
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
