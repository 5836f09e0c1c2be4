/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to the user (stderr in the CLI) and never mixes with the
/// formatted report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate task (e.g. waiting on an external command).
    /// The task ends at the next `report_error` or `report_completion`.
    fn begin_task(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
