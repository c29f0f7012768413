use crate::resolution::domain::{
    JvmLibraryArtifact, ReportMetadata, SoftwareArtifact, SoftwareComponent,
};
use std::sync::Arc;

/// ReportResponse - Internal response DTO from the component report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Distinct components, ordered by identifier
    pub components: Vec<Arc<dyn SoftwareComponent<JvmLibraryArtifact>>>,
    /// Number of components read from the resolution result
    pub total_count: usize,
    /// Number of components removed by exclusion patterns
    pub excluded_count: usize,
    /// Number of components collapsed into an equal one
    pub duplicate_count: usize,
    pub metadata: ReportMetadata,
}

impl ReportResponse {
    /// Number of artifacts that failed to resolve across all components
    pub fn unresolved_artifact_count(&self) -> usize {
        self.components
            .iter()
            .flat_map(|c| c.artifacts())
            .filter(|a| a.failure().is_some())
            .count()
    }

    pub fn has_unresolved_artifacts(&self) -> bool {
        self.unresolved_artifact_count() > 0
    }
}
