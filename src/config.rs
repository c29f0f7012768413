//! Configuration file support for resolved-components.
//!
//! Provides YAML-based configuration through `resolved-components.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use anyhow::{bail, Context};
use resolved_components::application::dto::OutputFormat;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use resolved_components::shared::Result;

pub const CONFIG_FILENAME: &str = "resolved-components.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_components: Option<Vec<String>>,
    pub fail_on_unresolved: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Options in effect once the config file and the command line are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub exclude_patterns: Vec<String>,
    pub fail_on_unresolved: bool,
}

impl ConfigFile {
    /// Merges with command-line values. Explicit CLI values win; exclusion
    /// patterns are concatenated (config first) without repeating a pattern.
    pub fn merge(
        self,
        cli_format: Option<OutputFormat>,
        cli_exclude: Vec<String>,
        cli_fail_on_unresolved: bool,
    ) -> Result<EffectiveOptions> {
        let format = match cli_format {
            Some(format) => format,
            None => self
                .format
                .as_deref()
                .map(OutputFormat::from_str)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        let mut exclude_patterns = self.exclude_components.unwrap_or_default();
        for pattern in cli_exclude {
            if !exclude_patterns.contains(&pattern) {
                exclude_patterns.push(pattern);
            }
        }

        Ok(EffectiveOptions {
            format,
            exclude_patterns,
            fail_on_unresolved: cli_fail_on_unresolved || self.fail_on_unresolved.unwrap_or(false),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Set 'format' to \"json\" or \"markdown\".",
                e
            );
        }
    }

    if let Some(ref patterns) = config.exclude_components {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_components[{}] must not be empty.\n\n\
                     💡 Hint: Remove the entry or give it a pattern such as \"org.junit*\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
