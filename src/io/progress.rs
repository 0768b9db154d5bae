//! Batch progress display for multi-file runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}} {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advancing once per processed file
///
/// The message shows the file currently being transformed.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar until [`ProgressManager::initialize`]
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Create the bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Show which file is being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(display_name.into_owned());
        }
    }

    /// Advance past a finished file
    pub fn complete_file(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of files marked complete since the last initialization
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Total the bar was initialized with, zero before initialization
    pub fn total(&self) -> u64 {
        self.bar
            .as_ref()
            .and_then(ProgressBar::length)
            .unwrap_or(0)
    }

    /// Leave a final summary line
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All files processed");
        }
    }

    /// Stop the bar at the current position after a failed file
    pub fn abandon(&self) {
        if let Some(ref bar) = self.bar {
            bar.abandon_with_message("Stopped on error");
        }
    }

    /// Whether the bar was finished or abandoned
    pub fn is_finished(&self) -> bool {
        self.bar.as_ref().is_some_and(ProgressBar::is_finished)
    }
}
