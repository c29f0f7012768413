/// Use cases - Application business logic
///
/// Use cases orchestrate domain services and ports; infrastructure is
/// injected through generic parameters.
mod build_component_report;

pub use build_component_report::BuildComponentReportUseCase;
