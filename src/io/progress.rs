//! Progress display for word placement

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} words"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many words have been placed on lines
///
/// Draws to standard error, leaving standard output free for packed lines.
pub struct ProgressManager {
    bar: ProgressBar,
    lines: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no work registered
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
            lines: 0,
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            lines: 0,
        }
    }

    /// Register the total number of words to place
    pub fn initialize(&mut self, word_count: usize) {
        self.bar.set_length(word_count as u64);
        self.bar.set_position(0);
        self.bar.set_style(PROGRESS_STYLE.clone());
        self.lines = 0;
        self.bar.set_message("line 0");
    }

    /// Record one emitted line carrying `words` words
    pub fn line_packed(&mut self, words: usize) {
        self.lines += 1;
        self.bar.inc(words as u64);
        self.bar.set_message(format!("line {}", self.lines));
    }

    /// Lines recorded since initialization
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Words recorded since initialization
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
