//! resolved-components - reports the components of a dependency resolution result
//!
//! The core of this library is the component identity contract: every
//! resolved component exposes a [`ComponentIdentifier`](resolution::domain::ComponentIdentifier),
//! and two components are equal exactly when they are the same concrete
//! variant and carry equal identifiers. Artifacts never take part in
//! equality. On top of the contract the crate reads resolution results,
//! filters and deduplicates components, and renders JSON or Markdown reports,
//! following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`resolution`): identifiers, artifacts, components and the identity contract
//! - **Application Layer** (`application`): use cases, DTOs, parsers and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use resolved_components::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildComponentReportUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::new(PathBuf::from("resolution.toml"), vec![]);
//! let response = use_case.execute(request)?;
//!
//! let report = ComponentReportBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::parsers::ResolutionResultParser;
    pub use crate::application::read_models::{ComponentReport, ComponentReportBuilder};
    pub use crate::application::use_cases::BuildComponentReportUseCase;
    pub use crate::ports::inbound::ComponentReportPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, ResolutionResultReader,
    };
    pub use crate::resolution::domain::{
        ArtifactResolveError, ComponentIdentifier, ComponentKind, FileComponent,
        FileComponentIdentifier, JvmArtifactKind, JvmLibrary, JvmLibraryArtifact,
        ModuleComponent, ModuleComponentIdentifier, ProjectComponent,
        ProjectComponentIdentifier, SoftwareArtifact, SoftwareComponent,
    };
    pub use crate::resolution::services::{ComponentFilter, ComponentIndex};
    pub use crate::shared::error::{ComponentError, ExitCode};
    pub use crate::shared::Result;
}
