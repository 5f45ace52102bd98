//! Search progress display
//!
//! The backtracking search has no meaningful completion percentage, so
//! progress is shown as a spinner with a running node count.

use crate::io::configuration::PROGRESS_TICK_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting the number of search nodes visited
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create and start the spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message("assembling map");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Record one search node; the display updates at a fixed interval
    pub fn record_step(&self, steps: usize) {
        if steps % PROGRESS_TICK_INTERVAL == 0 {
            self.bar.set_message(format!("search nodes: {steps}"));
        }
    }

    /// Stop the spinner with a final node count
    pub fn finish(&self, steps: usize) {
        self.bar
            .finish_with_message(format!("assembled after {steps} search nodes"));
    }
}
