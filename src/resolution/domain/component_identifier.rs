use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length for group and module names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Prefix used by the display form of project identifiers
const PROJECT_PREFIX: &str = "project ";

fn validate_coordinate(value: &str, label: &str, max_len: usize, extra: &[char]) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", label);
    }

    if value.len() > max_len {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            label,
            value.len(),
            max_len
        );
    }

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_' || extra.contains(&c))
    {
        anyhow::bail!(
            "{} '{}' contains invalid characters. Only alphanumeric, dots, hyphens and underscores are allowed.",
            label,
            value
        );
    }

    Ok(())
}

/// NewType wrapper for a module group (e.g. `org.slf4j`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(group: String) -> Result<Self> {
        validate_coordinate(&group, "Group", MAX_NAME_LENGTH, &[])?;
        Ok(Self(group))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// NewType wrapper for a module name (e.g. `slf4j-api`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(module: String) -> Result<Self> {
        validate_coordinate(&module, "Module name", MAX_NAME_LENGTH, &[])?;
        Ok(Self(module))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// NewType wrapper for a resolved module version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleVersion(String);

impl ModuleVersion {
    pub fn new(version: String) -> Result<Self> {
        validate_coordinate(&version, "Module version", MAX_VERSION_LENGTH, &['+'])?;
        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies a component published to a repository by its coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleComponentIdentifier {
    group: Group,
    module: ModuleName,
    version: ModuleVersion,
}

impl ModuleComponentIdentifier {
    pub fn new(group: String, module: String, version: String) -> Result<Self> {
        Ok(Self {
            group: Group::new(group)?,
            module: ModuleName::new(module)?,
            version: ModuleVersion::new(version)?,
        })
    }

    pub fn group(&self) -> &str {
        self.group.as_str()
    }

    pub fn module(&self) -> &str {
        self.module.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

impl fmt::Display for ModuleComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group.0, self.module.0, self.version.0)
    }
}

/// Identifies a component built by a project of the current build.
///
/// Paths are colon-separated and absolute: `:` is the root project,
/// `:libs:core` a nested one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectComponentIdentifier {
    path: String,
}

impl ProjectComponentIdentifier {
    pub fn new(path: String) -> Result<Self> {
        if !path.starts_with(':') {
            anyhow::bail!("Project path '{}' must start with ':'", path);
        }

        if path.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "Project path is too long ({} bytes). Maximum allowed: {} bytes",
                path.len(),
                MAX_NAME_LENGTH
            );
        }

        if path != ":" {
            for segment in path[1..].split(':') {
                if segment.is_empty() {
                    anyhow::bail!("Project path '{}' contains an empty segment", path);
                }
                validate_coordinate(segment, "Project path segment", MAX_NAME_LENGTH, &[])?;
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == ":"
    }
}

impl fmt::Display for ProjectComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PROJECT_PREFIX, self.path)
    }
}

/// Identifies a component that is nothing more than a set of files
/// (a local jar, a directory of classes).
///
/// Names never contain `:`, so their display form cannot be mistaken for
/// module coordinates or a `project :path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileComponentIdentifier {
    display_name: String,
}

impl FileComponentIdentifier {
    pub fn new(display_name: String) -> Result<Self> {
        if display_name.trim().is_empty() {
            anyhow::bail!("File component name cannot be empty");
        }

        if display_name.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "File component name is too long ({} bytes). Maximum allowed: {} bytes",
                display_name.len(),
                MAX_NAME_LENGTH
            );
        }

        if display_name.chars().any(char::is_control) {
            anyhow::bail!("File component name contains control characters");
        }

        if display_name.trim() != display_name {
            anyhow::bail!(
                "File component name '{}' has leading or trailing whitespace",
                display_name
            );
        }

        if display_name.contains(':') {
            anyhow::bail!(
                "File component name '{}' cannot contain ':'. \
                 Names with ':' are reserved for module and project identifiers",
                display_name
            );
        }

        Ok(Self { display_name })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl fmt::Display for FileComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// The kind of component an identifier denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Module,
    Project,
    File,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Module => "module",
            ComponentKind::Project => "project",
            ComponentKind::File => "file",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a resolved component.
///
/// Immutable value type. Two identifiers are equal when they denote the same
/// component within the resolution domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentIdentifier {
    Module(ModuleComponentIdentifier),
    Project(ProjectComponentIdentifier),
    File(FileComponentIdentifier),
}

impl ComponentIdentifier {
    /// Shorthand for a module identifier built from raw coordinates
    pub fn module(group: &str, module: &str, version: &str) -> Result<Self> {
        Ok(Self::Module(ModuleComponentIdentifier::new(
            group.to_string(),
            module.to_string(),
            version.to_string(),
        )?))
    }

    pub fn project(path: &str) -> Result<Self> {
        Ok(Self::Project(ProjectComponentIdentifier::new(path.to_string())?))
    }

    pub fn file(display_name: &str) -> Result<Self> {
        Ok(Self::File(FileComponentIdentifier::new(display_name.to_string())?))
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentIdentifier::Module(_) => ComponentKind::Module,
            ComponentIdentifier::Project(_) => ComponentKind::Project,
            ComponentIdentifier::File(_) => ComponentKind::File,
        }
    }

    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentIdentifier::Module(id) => id.fmt(f),
            ComponentIdentifier::Project(id) => id.fmt(f),
            ComponentIdentifier::File(id) => id.fmt(f),
        }
    }
}

impl From<ModuleComponentIdentifier> for ComponentIdentifier {
    fn from(id: ModuleComponentIdentifier) -> Self {
        Self::Module(id)
    }
}

impl From<ProjectComponentIdentifier> for ComponentIdentifier {
    fn from(id: ProjectComponentIdentifier) -> Self {
        Self::Project(id)
    }
}

impl From<FileComponentIdentifier> for ComponentIdentifier {
    fn from(id: FileComponentIdentifier) -> Self {
        Self::File(id)
    }
}

impl FromStr for ComponentIdentifier {
    type Err = anyhow::Error;

    /// Parses `group:module:version` coordinates or `project :path`.
    /// File identifiers have no textual form and must be built explicitly.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(path) = s.strip_prefix(PROJECT_PREFIX) {
            return Self::project(path);
        }

        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, module, version] => Self::module(group, module, version),
            _ => anyhow::bail!(
                "Invalid component identifier '{}'. Expected 'group:module:version' or 'project :path'",
                s
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_identifier_display() {
        let id = ComponentIdentifier::module("org.slf4j", "slf4j-api", "2.0.9").unwrap();
        assert_eq!(id.to_string(), "org.slf4j:slf4j-api:2.0.9");
        assert_eq!(id.kind(), ComponentKind::Module);
    }

    #[test]
    fn test_module_identifier_accessors() {
        let id = ModuleComponentIdentifier::new(
            "com.google.guava".to_string(),
            "guava".to_string(),
            "32.1.2-jre".to_string(),
        )
        .unwrap();
        assert_eq!(id.group(), "com.google.guava");
        assert_eq!(id.module(), "guava");
        assert_eq!(id.version(), "32.1.2-jre");
    }

    #[test]
    fn test_module_identifier_rejects_empty_parts() {
        assert!(ComponentIdentifier::module("", "guava", "1.0").is_err());
        assert!(ComponentIdentifier::module("com.google", "", "1.0").is_err());
        assert!(ComponentIdentifier::module("com.google", "guava", "").is_err());
    }

    #[test]
    fn test_module_identifier_rejects_invalid_characters() {
        let result = ComponentIdentifier::module("org;rm -rf", "x", "1.0");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("invalid characters"));
    }

    #[test]
    fn test_version_allows_build_metadata() {
        assert!(ComponentIdentifier::module("g", "m", "1.0.0+build.5").is_ok());
        assert!(ComponentIdentifier::module("g+x", "m", "1.0").is_err());
    }

    #[test]
    fn test_version_length_limit() {
        let long = "1".repeat(MAX_VERSION_LENGTH + 1);
        let err = ComponentIdentifier::module("g", "m", &long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_project_identifier() {
        let id = ComponentIdentifier::project(":libs:core").unwrap();
        assert_eq!(id.to_string(), "project :libs:core");
        assert_eq!(id.kind(), ComponentKind::Project);

        let root = ProjectComponentIdentifier::new(":".to_string()).unwrap();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "project :");
    }

    #[test]
    fn test_project_identifier_validation() {
        assert!(ComponentIdentifier::project("app").is_err());
        assert!(ComponentIdentifier::project(":app::core").is_err());
        assert!(ComponentIdentifier::project(":app:").is_err());
    }

    #[test]
    fn test_file_identifier() {
        let id = ComponentIdentifier::file("libs/vendor.jar").unwrap();
        assert_eq!(id.to_string(), "libs/vendor.jar");
        assert_eq!(id.kind(), ComponentKind::File);
        assert!(ComponentIdentifier::file("  ").is_err());
        assert!(ComponentIdentifier::file("bad\nname").is_err());
    }

    #[test]
    fn test_file_identifier_rejects_surrounding_whitespace() {
        assert!(ComponentIdentifier::file(" a.jar").is_err());
        assert!(ComponentIdentifier::file("a.jar ").is_err());
        assert!(ComponentIdentifier::file("libs/my lib.jar").is_ok());
    }

    #[test]
    fn test_file_identifier_cannot_mimic_other_kinds() {
        let err = ComponentIdentifier::file("project :app").unwrap_err();
        assert!(err.to_string().contains("cannot contain ':'"));
        assert!(ComponentIdentifier::file("g:m:1").is_err());
    }

    #[test]
    fn test_display_forms_are_unique_per_kind() {
        let ids = [
            ComponentIdentifier::module("g", "m", "1").unwrap(),
            ComponentIdentifier::project(":app").unwrap(),
            ComponentIdentifier::file("libs/app.jar").unwrap(),
        ];
        for id in &ids {
            let reparsed = id.to_string().parse::<ComponentIdentifier>();
            match id.kind() {
                ComponentKind::File => assert!(reparsed.is_err()),
                _ => assert_eq!(&reparsed.unwrap(), id),
            }
        }
    }

    #[test]
    fn test_from_str_module() {
        let id: ComponentIdentifier = "group:artifact:1.0".parse().unwrap();
        assert_eq!(id, ComponentIdentifier::module("group", "artifact", "1.0").unwrap());
    }

    #[test]
    fn test_from_str_project() {
        let id: ComponentIdentifier = "project :app".parse().unwrap();
        assert_eq!(id, ComponentIdentifier::project(":app").unwrap());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("group:artifact".parse::<ComponentIdentifier>().is_err());
        assert!("a:b:c:d".parse::<ComponentIdentifier>().is_err());
        assert!("".parse::<ComponentIdentifier>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let id = ComponentIdentifier::project(":app").unwrap();
        assert_eq!(id.display_name().parse::<ComponentIdentifier>().unwrap(), id);
    }

    #[test]
    fn test_identifiers_of_different_kinds_differ() {
        let module = ComponentIdentifier::module("app", "app", "1").unwrap();
        let project = ComponentIdentifier::project(":app").unwrap();
        assert_ne!(module, project);
    }

    #[test]
    fn test_ordering_is_by_kind_then_value() {
        let mut ids = vec![
            ComponentIdentifier::file("a.jar").unwrap(),
            ComponentIdentifier::module("b", "b", "1").unwrap(),
            ComponentIdentifier::module("a", "a", "1").unwrap(),
            ComponentIdentifier::project(":x").unwrap(),
        ];
        ids.sort();
        let names: Vec<String> = ids.iter().map(|i| i.to_string()).collect();
        assert_eq!(names, vec!["a:a:1", "b:b:1", "project :x", "a.jar"]);
    }
}
