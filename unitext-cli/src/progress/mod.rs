//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for long running commands
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar counting `total` units of `unit`
    pub fn start(&mut self, total: u64, unit: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} {{msg}}");
        if let Ok(style) = ProgressStyle::default_bar().template(&template) {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Set the position to `done` units
    pub fn set_position(&self, done: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(done);
        }
    }

    /// Show what is being worked on
    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(message.into());
        }
    }

    /// Advance by one unit
    pub fn inc(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish and clear the current bar
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being shown
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_shows_nothing() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start(10, "chars");
        assert!(!reporter.is_active());
        reporter.inc();
        reporter.set_position(5);
        reporter.finish();
    }

    #[test]
    fn test_bar_lifecycle() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start(3, "kinds");
        assert!(reporter.is_active());
        reporter.set_message("word");
        reporter.inc();
        reporter.finish();
        assert!(!reporter.is_active());
    }
}
