use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::parsers::ResolutionResultParser;
use crate::ports::inbound::ComponentReportPort;
use crate::ports::outbound::{ProgressReporter, ResolutionResultReader};
use crate::resolution::domain::{JvmLibraryArtifact, SoftwareComponent};
use crate::resolution::services::{ComponentFilter, ComponentIndex, ReportMetadataGenerator};
use crate::shared::error::ComponentError;
use crate::shared::Result;
use std::sync::Arc;

type Component = Arc<dyn SoftwareComponent<JvmLibraryArtifact>>;

/// BuildComponentReportUseCase - reads, filters and deduplicates resolved components
///
/// # Type Parameters
/// * `R` - ResolutionResultReader implementation
/// * `P` - ProgressReporter implementation
pub struct BuildComponentReportUseCase<R, P> {
    reader: R,
    progress_reporter: P,
}

impl<R, P> BuildComponentReportUseCase<R, P>
where
    R: ResolutionResultReader,
    P: ProgressReporter,
{
    pub fn new(reader: R, progress_reporter: P) -> Self {
        Self {
            reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read and parse the resolution result
        self.progress_reporter.report(&format!(
            "📖 Loading resolution result from: {}",
            request.input_path.display()
        ));

        let content = self.reader.read_resolution_result(&request.input_path)?;
        let components = ResolutionResultParser::parse(&content).map_err(|e| {
            ComponentError::ResolutionResultParseError {
                path: request.input_path.clone(),
                details: format!("{:#}", e),
            }
        })?;
        let total_count = components.len();

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", total_count));

        // Step 2: Apply exclusion filters
        let components = self.apply_exclusions(components, request.exclude_patterns)?;
        let excluded_count = total_count - components.len();

        // Step 3: Collapse equal components
        let (components, duplicate_count) = self.deduplicate(components);

        if duplicate_count > 0 {
            self.progress_reporter.report(&format!(
                "🔁 Collapsed {} duplicate component(s)",
                duplicate_count
            ));
        }

        let response = ReportResponse {
            components,
            total_count,
            excluded_count,
            duplicate_count,
            metadata: ReportMetadataGenerator::generate_default(),
        };

        let unresolved = response.unresolved_artifact_count();
        if unresolved > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} artifact(s) could not be resolved.",
                unresolved
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ {} distinct component(s) ready",
            response.components.len()
        ));

        Ok(response)
    }

    fn apply_exclusions(
        &self,
        components: Vec<Component>,
        exclude_patterns: Vec<String>,
    ) -> Result<Vec<Component>> {
        if exclude_patterns.is_empty() {
            return Ok(components);
        }

        let filter = ComponentFilter::new(exclude_patterns).map_err(|e| {
            ComponentError::Validation {
                message: e.to_string(),
            }
        })?;
        let original_count = components.len();
        let kept = filter.filter_components(components);

        let excluded_count = original_count - kept.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} component(s) based on filters",
                excluded_count
            ));
        }

        if kept.is_empty() && original_count > 0 {
            anyhow::bail!(
                "All {} component(s) were excluded by the provided filters. \
                 The report would be empty. Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any component.",
                pattern
            ));
        }

        Ok(kept)
    }

    fn deduplicate(&self, components: Vec<Component>) -> (Vec<Component>, usize) {
        let total = components.len();
        let index = ComponentIndex::new();
        let mut duplicates = 0;

        for (i, component) in components.into_iter().enumerate() {
            if !index.insert(component) {
                duplicates += 1;
            }
            self.progress_reporter
                .report_progress(i + 1, total, Some("indexing components"));
        }

        (index.sorted_components(), duplicates)
    }
}

impl<R, P> ComponentReportPort for BuildComponentReportUseCase<R, P>
where
    R: ResolutionResultReader,
    P: ProgressReporter,
{
    fn build_report(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request)
    }
}
