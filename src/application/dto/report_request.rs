use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the component report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the resolution result file
    pub input_path: PathBuf,
    /// Patterns for excluding components from the report
    pub exclude_patterns: Vec<String>,
}

impl ReportRequest {
    pub fn new(input_path: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Self {
            input_path,
            exclude_patterns,
        }
    }
}
