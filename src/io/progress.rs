//! Progress display for batch rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Presets: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single batch progress bar over a known item count
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized for the batch
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the name of the item currently being rendered
    pub fn start_item(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Mark the current item as done
    pub fn complete_item(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the message line
    pub fn finish(&self) {
        self.bar.finish_with_message("All presets rendered");
    }
}
