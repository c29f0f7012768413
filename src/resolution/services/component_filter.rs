use crate::resolution::domain::{SoftwareArtifact, SoftwareComponent};
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ComponentFilter - Excludes components whose identifier matches a pattern
///
/// Patterns are matched against the identifier's display form
/// (`group:module:version`, `project :path`, or the file name).
/// `*` matches zero or more characters; everything else is literal and
/// case-sensitive.
#[derive(Debug)]
pub struct ComponentFilter {
    patterns: Vec<ExcludePattern>,
}

impl ComponentFilter {
    /// Creates a new ComponentFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Keeps the components that match no exclusion pattern
    pub fn filter_components<A, C>(&self, components: Vec<C>) -> Vec<C>
    where
        A: SoftwareArtifact,
        C: std::ops::Deref,
        C::Target: SoftwareComponent<A>,
    {
        components
            .into_iter()
            .filter(|component| !self.matches(&component.id().to_string()))
            .collect()
    }

    /// Checks if an identifier display name matches any exclusion pattern
    ///
    /// Every pattern is evaluated so that unmatched-pattern tracking stays
    /// accurate.
    pub fn matches(&self, display_name: &str) -> bool {
        self.patterns
            .iter()
            .fold(false, |matched, p| p.matches(display_name) || matched)
    }

    /// Returns the patterns that have not matched anything so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    /// Literal pieces between wildcards, in order
    parts: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let parts = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            parts,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, candidate: &str) -> bool {
        let is_match = self.matches_parts(candidate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn matches_parts(&self, candidate: &str) -> bool {
        let mut rest = candidate;
        let last = self.parts.len().saturating_sub(1);

        for (i, part) in self.parts.iter().enumerate() {
            if i == 0 && self.anchored_start {
                match rest.strip_prefix(part.as_str()) {
                    Some(tail) => rest = tail,
                    None => return false,
                }
                if self.parts.len() == 1 && self.anchored_end {
                    return rest.is_empty();
                }
                continue;
            }

            if i == last && self.anchored_end {
                return rest.ends_with(part.as_str());
            }

            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }

        true
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, slashes, spaces and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '/' | ' ' | '*')
}
