/// ProgressReporter port for user feedback while a report is built
///
/// Implementations write to a side channel (stderr) so that report output
/// on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a step of the workflow
    fn report(&self, message: &str);

    /// Reports how many of `total` items have been processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a non-fatal error
    fn report_error(&self, message: &str);

    /// Reports that the workflow finished
    fn report_completion(&self, message: &str);
}
