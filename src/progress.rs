//! Progress reporting for the compile pass
//!
//! All progress goes through the [`ProgressReporter`] trait so the library
//! stays quiet unless the caller asks for a bar.

use indicatif::{ProgressBar, ProgressStyle};

use crate::assets::AssetKind;

/// Progress reporter for long-running compile passes
pub trait ProgressReporter: Send + Sync {
    /// Initialize progress with the total number of groups to compile
    fn start(&mut self, total_groups: u64);

    /// Show the group currently being compiled
    fn update_group(&mut self, kind: AssetKind, group: &str);

    /// Mark the current group as done
    fn inc_group(&mut self);

    /// Finish successfully
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter drawing an indicatif bar on stderr
///
/// indicatif hides the bar by itself when stderr is not a terminal.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    bar: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total_groups: u64) {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_groups);
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn update_group(&mut self, kind: AssetKind, group: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{kind}/{group}"));
        }
    }

    fn inc_group(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.abandon();
        }
    }
}

/// Reporter that displays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total_groups: u64) {}
    fn update_group(&mut self, _kind: AssetKind, _group: &str) {}
    fn inc_group(&mut self) {}
    fn finish(&mut self) {}
    fn abandon(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_reporter_lifecycle() {
        let mut progress = InteractiveProgressReporter::new();
        progress.start(2);
        progress.update_group(AssetKind::Style, "global");
        progress.inc_group();
        progress.update_group(AssetKind::Script, "app");
        progress.inc_group();
        progress.finish();
    }

    #[test]
    fn test_reporter_before_start_is_a_no_op() {
        let mut progress = InteractiveProgressReporter::new();
        progress.update_group(AssetKind::Style, "global");
        progress.inc_group();
        progress.abandon();
    }
}
