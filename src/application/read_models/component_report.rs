//! Component report read model
//!
//! A flattened view of a report, ready to be rendered by any formatter.

/// Main read model of a component report
#[derive(Debug, Clone)]
pub struct ComponentReport {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummary,
    /// Distinct components, ordered by identifier
    pub components: Vec<ComponentView>,
}

#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub serial_number: String,
}

/// Counters describing how the component list was reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Components listed in the resolution result
    pub total_components: usize,
    pub excluded_components: usize,
    pub duplicate_components: usize,
    /// Components left in the report
    pub distinct_components: usize,
    pub resolved_artifacts: usize,
    pub unresolved_artifacts: usize,
}

#[derive(Debug, Clone)]
pub struct ComponentView {
    /// Display form of the component identifier
    pub id: String,
    /// `module`, `project` or `file`
    pub kind: String,
    pub artifacts: Vec<ArtifactView>,
}

impl ComponentView {
    pub fn resolved_artifacts(&self) -> impl Iterator<Item = &ArtifactView> {
        self.artifacts.iter().filter(|a| a.file.is_some())
    }

    pub fn unresolved_artifacts(&self) -> impl Iterator<Item = &ArtifactView> {
        self.artifacts.iter().filter(|a| a.failure.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactView {
    /// `jar`, `sources` or `javadoc`
    pub kind: String,
    pub file: Option<String>,
    pub failure: Option<String>,
}
