use crate::resolution::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Generates report metadata with the current timestamp and a fresh serial number
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    pub fn generate(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Metadata naming this tool, with the compile-time crate version
    pub fn generate_default() -> ReportMetadata {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
