//! Progress display for placement runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many placements have been applied to a grid
///
/// A hidden manager accepts the same calls without drawing anything, which
/// keeps quiet runs on the same code path.
pub struct ProgressManager {
    bar: ProgressBar,
    accepted: usize,
    ignored: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager that draws to the terminal
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PLACEMENT_STYLE.clone());
        Self {
            bar,
            accepted: 0,
            ignored: 0,
        }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            accepted: 0,
            ignored: 0,
        }
    }

    /// Set the number of placements expected
    pub fn initialize(&mut self, placements: usize) {
        self.accepted = 0;
        self.ignored = 0;
        self.bar.set_length(placements as u64);
        self.bar.set_position(0);
        self.bar.set_message("placing");
    }

    /// Record one placement and whether the grid accepted it
    pub fn record(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.ignored += 1;
        }
        self.bar.inc(1);
    }

    /// Placements that landed inside the grid
    pub const fn accepted(&self) -> usize {
        self.accepted
    }

    /// Placements that fell outside the grid
    pub const fn ignored(&self) -> usize {
        self.ignored
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
