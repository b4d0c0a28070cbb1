//! Per-stage progress display for the generate and fuse stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos:>3}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per pipeline stage
///
/// Bars of finished stages stay on screen until [`ProgressManager::finish`],
/// so a `build` run shows both stages.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bar: None,
        }
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            stage_bar: None,
        }
    }

    /// Begin a stage of `len` steps, finishing any stage still running
    pub fn start_stage(&mut self, name: &str, len: usize) {
        self.finish_stage("");
        let bar = ProgressBar::new(len as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.stage_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the current stage by one step, labelled with the item just handled
    pub fn advance(&self, item: &str) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_message(item.to_string());
            bar.inc(1);
        }
    }

    /// Finish the current stage with a closing message
    pub fn finish_stage(&mut self, message: &str) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_with_message(message.to_string());
        }
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_stage("");
        let _ = self.multi_progress.clear();
    }
}
