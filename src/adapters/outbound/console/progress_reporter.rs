use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with stdout output. Uses
/// indicatif for the fetch spinner and the record-building progress bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    /// Clears whatever bar or spinner is currently shown
    fn finish_current(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        match pb_option.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) => pb.clone(),
            _ => {
                if let Some(previous) = pb_option.take() {
                    previous.finish_and_clear();
                }
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                ) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                *pb_option = Some(pb.clone());
                pb
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.finish_current();
        eprintln!("{}", message);
    }

    fn report_waiting(&self, message: &str) {
        self.finish_current();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.progress_bar.borrow_mut() = Some(spinner);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_current();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_current();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_sequence() {
        // Output goes to stderr; this only checks that no call panics
        let reporter = StderrProgressReporter::new();
        reporter.report_waiting("Fetching");
        reporter.report("Decoding");
        reporter.report_progress(1, 10, Some("Building"));
        reporter.report_progress(10, 10, None);
        reporter.report_error("⚠️  Warning: test");
        reporter.report_completion("Done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_progress_bar_is_reused_for_same_total() {
        let reporter = StderrProgressReporter::default();
        let first = reporter.get_or_create_progress_bar(5);
        first.set_position(3);
        let second = reporter.get_or_create_progress_bar(5);
        assert_eq!(second.position(), 3);
    }
}
