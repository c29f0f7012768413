use super::{
    same_component, hash_component, ComponentIdentifier, FileComponentIdentifier,
    JvmArtifactKind, JvmLibraryArtifact, ModuleComponentIdentifier, ProjectComponentIdentifier,
    SoftwareArtifact, SoftwareComponent,
};
use std::hash::{Hash, Hasher};

/// Implements `SoftwareComponent` plus identity-based `PartialEq`, `Eq` and
/// `Hash` for a component struct with `id` and `artifacts` fields.
macro_rules! component_identity {
    ($component:ident) => {
        impl<A: SoftwareArtifact> SoftwareComponent<A> for $component<A> {
            fn id(&self) -> &ComponentIdentifier {
                &self.id
            }

            fn artifacts(&self) -> &[A] {
                &self.artifacts
            }
        }

        impl<A: SoftwareArtifact> PartialEq for $component<A> {
            fn eq(&self, other: &Self) -> bool {
                same_component::<A, Self, Self>(self, other)
            }
        }

        impl<A: SoftwareArtifact> Eq for $component<A> {}

        impl<A: SoftwareArtifact> Hash for $component<A> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                hash_component::<A, Self, H>(self, state);
            }
        }
    };
}

/// A component published to a repository and addressed by coordinates
#[derive(Debug, Clone)]
pub struct ModuleComponent<A: SoftwareArtifact> {
    id: ComponentIdentifier,
    artifacts: Vec<A>,
}

impl<A: SoftwareArtifact> ModuleComponent<A> {
    pub fn new(id: ModuleComponentIdentifier, artifacts: Vec<A>) -> Self {
        Self {
            id: id.into(),
            artifacts,
        }
    }
}

component_identity!(ModuleComponent);

/// A component built by a project of the current build
#[derive(Debug, Clone)]
pub struct ProjectComponent<A: SoftwareArtifact> {
    id: ComponentIdentifier,
    artifacts: Vec<A>,
}

impl<A: SoftwareArtifact> ProjectComponent<A> {
    pub fn new(id: ProjectComponentIdentifier, artifacts: Vec<A>) -> Self {
        Self {
            id: id.into(),
            artifacts,
        }
    }
}

component_identity!(ProjectComponent);

/// A component made only of local files
#[derive(Debug, Clone)]
pub struct FileComponent<A: SoftwareArtifact> {
    id: ComponentIdentifier,
    artifacts: Vec<A>,
}

impl<A: SoftwareArtifact> FileComponent<A> {
    pub fn new(id: FileComponentIdentifier, artifacts: Vec<A>) -> Self {
        Self {
            id: id.into(),
            artifacts,
        }
    }
}

component_identity!(FileComponent);

/// A JVM library resolved from a repository
pub type JvmLibrary = ModuleComponent<JvmLibraryArtifact>;

impl ModuleComponent<JvmLibraryArtifact> {
    fn artifacts_of(&self, kind: JvmArtifactKind) -> impl Iterator<Item = &JvmLibraryArtifact> {
        self.artifacts.iter().filter(move |a| a.kind() == kind)
    }

    pub fn jar_artifacts(&self) -> impl Iterator<Item = &JvmLibraryArtifact> {
        self.artifacts_of(JvmArtifactKind::Jar)
    }

    pub fn sources_artifacts(&self) -> impl Iterator<Item = &JvmLibraryArtifact> {
        self.artifacts_of(JvmArtifactKind::Sources)
    }

    pub fn javadoc_artifacts(&self) -> impl Iterator<Item = &JvmLibraryArtifact> {
        self.artifacts_of(JvmArtifactKind::Javadoc)
    }
}
