use crate::application::read_models::ComponentReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a component report
pub trait ReportFormatter {
    /// Formats the report as a string ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ComponentReport) -> Result<String>;
}
