pub mod component_filter;
pub mod component_index;
pub mod report_metadata_generator;

pub use component_filter::ComponentFilter;
pub use component_index::{ComponentIndex, ComponentKey};
pub use report_metadata_generator::ReportMetadataGenerator;
