//! CLI progress display utilities

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::progress::{Phase, Progress};

/// Package - for extraction operations
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Picture - for card art operations
pub static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/2] 📦 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Progress bar style for determinate progress
///
/// Format: `Decoding objects [████████░░░░░░░░] 50/100`
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Create a simple progress bar
#[must_use]
pub fn simple_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style());
    pb.set_message(msg.to_string());
    pb
}

/// Drives one progress bar from library progress updates.
///
/// The bar is reset whenever the phase changes, so a decode pass followed
/// by a write pass shows as two consecutive runs.
pub struct PhaseBar {
    bar: ProgressBar,
    phase: std::cell::Cell<Option<Phase>>,
}

impl PhaseBar {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            simple_bar(0, "")
        };
        Self {
            bar,
            phase: std::cell::Cell::new(None),
        }
    }

    pub fn update(&self, progress: &Progress) {
        if progress.phase == Phase::Complete {
            return;
        }
        if self.phase.get() != Some(progress.phase) {
            self.phase.set(Some(progress.phase));
            self.bar.reset();
            self.bar.set_length(progress.total as u64);
            self.bar.set_message(progress.phase.as_str());
        }
        self.bar.set_position(progress.current as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
