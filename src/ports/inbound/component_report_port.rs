use crate::application::dto::{ReportRequest, ReportResponse};
use crate::shared::Result;

/// ComponentReportPort - Inbound port for building a component report
///
/// This is what driving adapters (the CLI) call. It reads a resolution
/// result, applies exclusions and collapses equal components.
pub trait ComponentReportPort {
    /// # Errors
    /// Returns an error if:
    /// - The resolution result cannot be read or parsed
    /// - An exclusion pattern is invalid
    /// - Every component was excluded
    fn build_report(&self, request: ReportRequest) -> Result<ReportResponse>;
}
