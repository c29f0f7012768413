use crate::application::read_models::{ArtifactView, ComponentReport, ComponentView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    serial_number: &'a str,
    metadata: Metadata<'a>,
    summary: Summary,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    total_components: usize,
    excluded_components: usize,
    duplicate_components: usize,
    distinct_components: usize,
    resolved_artifacts: usize,
    unresolved_artifacts: usize,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    id: &'a str,
    kind: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    artifacts: Vec<Artifact<'a>>,
}

#[derive(Debug, Serialize)]
struct Artifact<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a str>,
}

impl<'a> From<&'a ArtifactView> for Artifact<'a> {
    fn from(view: &'a ArtifactView) -> Self {
        Self {
            kind: &view.kind,
            file: view.file.as_deref(),
            failure: view.failure.as_deref(),
        }
    }
}

impl<'a> From<&'a ComponentView> for Component<'a> {
    fn from(view: &'a ComponentView) -> Self {
        Self {
            id: &view.id,
            kind: &view.kind,
            artifacts: view.artifacts.iter().map(Artifact::from).collect(),
        }
    }
}

/// JsonFormatter adapter rendering the report as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ComponentReport) -> Result<String> {
        let summary = &report.summary;
        let document = Report {
            serial_number: &report.metadata.serial_number,
            metadata: Metadata {
                timestamp: &report.metadata.timestamp,
                tool: Tool {
                    name: &report.metadata.tool_name,
                    version: &report.metadata.tool_version,
                },
            },
            summary: Summary {
                total_components: summary.total_components,
                excluded_components: summary.excluded_components,
                duplicate_components: summary.duplicate_components,
                distinct_components: summary.distinct_components,
                resolved_artifacts: summary.resolved_artifacts,
                unresolved_artifacts: summary.unresolved_artifacts,
            },
            components: report.components.iter().map(Component::from).collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
