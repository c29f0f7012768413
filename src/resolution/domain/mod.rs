pub mod artifact;
pub mod component_identifier;
pub mod components;
pub mod report_metadata;
pub mod software_component;

pub use artifact::{
    ArtifactOutcome, ArtifactResolveError, JvmArtifactKind, JvmLibraryArtifact, SoftwareArtifact,
};
pub use component_identifier::{
    ComponentIdentifier, ComponentKind, FileComponentIdentifier, ModuleComponentIdentifier,
    ProjectComponentIdentifier,
};
pub use components::{FileComponent, JvmLibrary, ModuleComponent, ProjectComponent};
pub use report_metadata::ReportMetadata;
pub use software_component::{
    component_type_id, hash_component, same_component, AsAny, SoftwareComponent,
};
