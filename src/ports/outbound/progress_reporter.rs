/// ProgressReporter port for reporting progress during a catalog load
///
/// Implementations write somewhere other than stdout so that query output
/// stays machine-readable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a step that blocks until the next message (e.g. the page
    /// fetch). Defaults to a plain message.
    fn report_waiting(&self, message: &str) {
        self.report(message);
    }

    /// Reports progress with a position out of a total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
