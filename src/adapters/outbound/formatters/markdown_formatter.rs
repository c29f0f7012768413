use crate::application::read_models::{ComponentReport, ComponentView, ReportSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const TABLE_HEADER: &str = "| Component | Kind | Resolved Artifacts | Unresolved Artifacts |\n";

const TABLE_SEPARATOR: &str = "|-----------|------|--------------------|----------------------|\n";

const FAILURE_TABLE_HEADER: &str = "| Component | Artifact | Failure |\n";

const FAILURE_TABLE_SEPARATOR: &str = "|-----------|----------|---------|\n";

/// MarkdownFormatter adapter rendering the report as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line endings for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_header(output: &mut String, report: &ComponentReport) {
        output.push_str("# Resolved Components\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}.\n\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.timestamp
        ));
    }

    fn render_summary(output: &mut String, summary: &ReportSummary) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Components in resolution result: {}\n",
            summary.total_components
        ));
        output.push_str(&format!("- Excluded by filters: {}\n", summary.excluded_components));
        output.push_str(&format!("- Duplicates collapsed: {}\n", summary.duplicate_components));
        output.push_str(&format!("- Distinct components: {}\n", summary.distinct_components));
        output.push_str(&format!(
            "- Artifacts: {} resolved, {} unresolved\n\n",
            summary.resolved_artifacts, summary.unresolved_artifacts
        ));
    }

    fn render_components(output: &mut String, components: &[ComponentView]) {
        output.push_str("## Components\n\n");
        if components.is_empty() {
            output.push_str("No components.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_cell(&component.id),
                component.kind,
                component.resolved_artifacts().count(),
                component.unresolved_artifacts().count()
            ));
        }
        output.push('\n');
    }

    fn render_failures(output: &mut String, components: &[ComponentView]) {
        let failures: Vec<_> = components
            .iter()
            .flat_map(|c| c.unresolved_artifacts().map(move |a| (c, a)))
            .collect();
        if failures.is_empty() {
            return;
        }

        output.push_str("## Unresolved Artifacts\n\n");
        output.push_str(FAILURE_TABLE_HEADER);
        output.push_str(FAILURE_TABLE_SEPARATOR);
        for (component, artifact) in failures {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&component.id),
                artifact.kind,
                Self::escape_cell(artifact.failure.as_deref().unwrap_or(""))
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ComponentReport) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, report);
        Self::render_summary(&mut output, &report.summary);
        Self::render_components(&mut output, &report.components);
        Self::render_failures(&mut output, &report.components);
        Ok(output)
    }
}
