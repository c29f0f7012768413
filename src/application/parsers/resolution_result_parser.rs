use crate::resolution::domain::{
    ArtifactResolveError, FileComponent, FileComponentIdentifier, JvmArtifactKind, JvmLibrary,
    JvmLibraryArtifact, ModuleComponentIdentifier, ProjectComponent, ProjectComponentIdentifier,
    SoftwareComponent,
};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ResolutionResultDocument {
    #[serde(default)]
    component: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ComponentEntry {
    Module {
        group: String,
        module: String,
        version: String,
        #[serde(default, rename = "artifact")]
        artifacts: Vec<ArtifactEntry>,
    },
    Project {
        path: String,
        #[serde(default, rename = "artifact")]
        artifacts: Vec<ArtifactEntry>,
    },
    File {
        name: String,
        #[serde(default, rename = "artifact")]
        artifacts: Vec<ArtifactEntry>,
    },
}

#[derive(Debug, Deserialize)]
struct ArtifactEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    file: Option<PathBuf>,
    #[serde(default)]
    failure: Option<String>,
}

impl ArtifactEntry {
    fn into_artifact(self) -> Result<JvmLibraryArtifact> {
        let kind = JvmArtifactKind::from_str(&self.kind).map_err(|e| anyhow::anyhow!(e))?;

        match (self.file, self.failure) {
            (Some(file), None) => Ok(JvmLibraryArtifact::resolved(kind, file)),
            (None, Some(failure)) => Ok(JvmLibraryArtifact::failed(
                kind,
                ArtifactResolveError::new(failure),
            )),
            (Some(_), Some(_)) => {
                anyhow::bail!("{} artifact has both 'file' and 'failure'", kind)
            }
            (None, None) => anyhow::bail!("{} artifact needs either 'file' or 'failure'", kind),
        }
    }
}

fn convert_artifacts(entries: Vec<ArtifactEntry>) -> Result<Vec<JvmLibraryArtifact>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_artifact().with_context(|| format!("artifact[{}]", i)))
        .collect()
}

impl ComponentEntry {
    fn into_component(self) -> Result<Arc<dyn SoftwareComponent<JvmLibraryArtifact>>> {
        let component: Arc<dyn SoftwareComponent<JvmLibraryArtifact>> = match self {
            ComponentEntry::Module {
                group,
                module,
                version,
                artifacts,
            } => Arc::new(JvmLibrary::new(
                ModuleComponentIdentifier::new(group, module, version)?,
                convert_artifacts(artifacts)?,
            )),
            ComponentEntry::Project { path, artifacts } => Arc::new(ProjectComponent::new(
                ProjectComponentIdentifier::new(path)?,
                convert_artifacts(artifacts)?,
            )),
            ComponentEntry::File { name, artifacts } => Arc::new(FileComponent::new(
                FileComponentIdentifier::new(name)?,
                convert_artifacts(artifacts)?,
            )),
        };
        Ok(component)
    }
}

/// Turns a TOML resolution result document into components.
///
/// Components keep the order in which they appear in the document.
pub struct ResolutionResultParser;

impl ResolutionResultParser {
    pub fn parse(content: &str) -> Result<Vec<Arc<dyn SoftwareComponent<JvmLibraryArtifact>>>> {
        let document: ResolutionResultDocument =
            toml::from_str(content).context("Invalid resolution result document")?;

        document
            .component
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                entry
                    .into_component()
                    .with_context(|| format!("Invalid entry component[{}]", i))
            })
            .collect()
    }
}
