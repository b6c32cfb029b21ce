use std::sync::{Arc, Mutex};
use tevcat::prelude::*;

/// One call received by the mock reporter
#[derive(Debug, Clone, PartialEq)]
pub enum Reported {
    Message(String),
    Progress { current: usize, total: usize },
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter that records every call; clones share the log
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<Reported>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<Reported> {
        self.log.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.reported()
            .into_iter()
            .filter_map(|r| match r {
                Reported::Message(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Validation warnings, with the `⚠️  Warning:` prefix removed
    pub fn warnings(&self) -> Vec<String> {
        self.reported()
            .into_iter()
            .filter_map(|r| match r {
                Reported::Error(e) => e
                    .strip_prefix("⚠️  Warning: ")
                    .map(str::to_string),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.reported().into_iter().rev().find_map(|r| match r {
            Reported::Completion(c) => Some(c),
            _ => None,
        })
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.reported()
            .into_iter()
            .filter_map(|r| match r {
                Reported::Progress { current, total } => Some((current, total)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, reported: Reported) {
        self.log.lock().unwrap().push(reported);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Reported::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.push(Reported::Progress { current, total });
    }

    fn report_error(&self, message: &str) {
        self.push(Reported::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(Reported::Completion(message.to_string()));
    }
}
