//! Progress bar display for bulk updates

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the update-all pass
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);

        Self { bar }
    }

    /// Show the bundle currently being refreshed and advance the bar
    pub fn on_bundle(&self, name: &str) {
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }

    /// Remove the bar so result lines print cleanly
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
