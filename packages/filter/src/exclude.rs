//! Filename exclusion rules.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use regex::Regex;

use crate::error::FilterError;

/// Patterns excluded when no configuration overrides them.
///
/// Version-control and IDE directories, compiled Java classes, and the
/// metadata macOS and NAS boxes leave behind on shared volumes.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"\.git",
    r"\.svn",
    r"\.idea",
    r"\.vscode",
    r".*\.class",
    r"\.DS_Store",
    r".*Temporary.*Items",
    r"\.@__thumb",
    r"Network Trash Folder",
];

/// An ordered list of filename patterns.
///
/// A name is excluded if any pattern matches anywhere inside it
/// (unanchored, case-sensitive).
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl ExclusionRules {
    /// Compile a list of patterns, keeping their order.
    ///
    /// # Errors
    ///
    /// * If any pattern is not a valid regular expression
    pub fn new<I, S>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Self::empty();
        rules.extend(patterns)?;
        Ok(rules)
    }

    /// Rules that exclude nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Append more patterns after the existing ones.
    ///
    /// # Errors
    ///
    /// * If any pattern is not a valid regular expression
    pub fn extend<I, S>(&mut self, patterns: I) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
            log::trace!("Added exclusion pattern {pattern}");
            self.patterns.push(regex);
        }
        Ok(())
    }

    /// Whether any pattern matches the name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    /// The pattern sources, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        let patterns = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();
        Self { patterns }
    }
}
