//! Read models for report rendering
//!
//! Query-optimized views consumed by the formatters.

mod component_report;
mod component_report_builder;

pub use component_report::{
    ArtifactView, ComponentReport, ComponentView, ReportMetadataView, ReportSummary,
};
pub use component_report_builder::ComponentReportBuilder;
