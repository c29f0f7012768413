use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an artifact of a resolved component could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ArtifactResolveError {
    message: String,
}

impl ArtifactResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Capability shared by every artifact a software component can own.
///
/// An artifact is either resolved to a file or carries the failure that
/// prevented it from being resolved, never both.
pub trait SoftwareArtifact: fmt::Debug + Send + Sync + 'static {
    /// The resolved file, if resolution succeeded
    fn file(&self) -> Option<&Path>;

    /// The resolution failure, if resolution did not succeed
    fn failure(&self) -> Option<&ArtifactResolveError>;

    fn is_resolved(&self) -> bool {
        self.file().is_some()
    }
}

/// Outcome of resolving a single artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    Resolved(PathBuf),
    Failed(ArtifactResolveError),
}

/// The artifact flavours a JVM library publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JvmArtifactKind {
    Jar,
    Sources,
    Javadoc,
}

impl JvmArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JvmArtifactKind::Jar => "jar",
            JvmArtifactKind::Sources => "sources",
            JvmArtifactKind::Javadoc => "javadoc",
        }
    }
}

impl fmt::Display for JvmArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JvmArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jar" => Ok(JvmArtifactKind::Jar),
            "sources" => Ok(JvmArtifactKind::Sources),
            "javadoc" => Ok(JvmArtifactKind::Javadoc),
            _ => Err(format!(
                "Unknown artifact type: {}. Expected 'jar', 'sources' or 'javadoc'",
                s
            )),
        }
    }
}

/// An artifact belonging to a JVM library component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmLibraryArtifact {
    kind: JvmArtifactKind,
    outcome: ArtifactOutcome,
}

impl JvmLibraryArtifact {
    pub fn resolved(kind: JvmArtifactKind, file: PathBuf) -> Self {
        Self {
            kind,
            outcome: ArtifactOutcome::Resolved(file),
        }
    }

    pub fn failed(kind: JvmArtifactKind, failure: ArtifactResolveError) -> Self {
        Self {
            kind,
            outcome: ArtifactOutcome::Failed(failure),
        }
    }

    pub fn kind(&self) -> JvmArtifactKind {
        self.kind
    }

    pub fn outcome(&self) -> &ArtifactOutcome {
        &self.outcome
    }
}

impl SoftwareArtifact for JvmLibraryArtifact {
    fn file(&self) -> Option<&Path> {
        match &self.outcome {
            ArtifactOutcome::Resolved(path) => Some(path.as_path()),
            ArtifactOutcome::Failed(_) => None,
        }
    }

    fn failure(&self) -> Option<&ArtifactResolveError> {
        match &self.outcome {
            ArtifactOutcome::Resolved(_) => None,
            ArtifactOutcome::Failed(err) => Some(err),
        }
    }
}
