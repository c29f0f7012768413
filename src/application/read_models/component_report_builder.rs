//! Builds the component report read model from a use case response

use super::component_report::{
    ArtifactView, ComponentReport, ComponentView, ReportMetadataView, ReportSummary,
};
use crate::application::dto::ReportResponse;
use crate::resolution::domain::{
    JvmLibraryArtifact, ReportMetadata, SoftwareArtifact, SoftwareComponent,
};

pub struct ComponentReportBuilder;

impl ComponentReportBuilder {
    pub fn build(response: &ReportResponse) -> ComponentReport {
        let components: Vec<ComponentView> = response
            .components
            .iter()
            .map(|c| Self::build_component(c.as_ref()))
            .collect();

        let (resolved, unresolved) = components
            .iter()
            .flat_map(|c| &c.artifacts)
            .fold((0, 0), |(ok, failed), a| {
                if a.file.is_some() {
                    (ok + 1, failed)
                } else {
                    (ok, failed + 1)
                }
            });

        ComponentReport {
            metadata: Self::build_metadata(&response.metadata),
            summary: ReportSummary {
                total_components: response.total_count,
                excluded_components: response.excluded_count,
                duplicate_components: response.duplicate_count,
                distinct_components: components.len(),
                resolved_artifacts: resolved,
                unresolved_artifacts: unresolved,
            },
            components,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
        }
    }

    fn build_component(component: &dyn SoftwareComponent<JvmLibraryArtifact>) -> ComponentView {
        ComponentView {
            id: component.id().to_string(),
            kind: component.id().kind().to_string(),
            artifacts: component
                .artifacts()
                .iter()
                .map(Self::build_artifact)
                .collect(),
        }
    }

    fn build_artifact(artifact: &JvmLibraryArtifact) -> ArtifactView {
        ArtifactView {
            kind: artifact.kind().to_string(),
            file: artifact.file().map(|p| p.display().to_string()),
            failure: artifact.failure().map(|e| e.to_string()),
        }
    }
}
