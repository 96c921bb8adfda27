//! Configuration types for filefind.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use filefind_filter::{
    CopyPolicy, DEFAULT_COPY_EXTENSIONS, DEFAULT_EXCLUDE_PATTERNS, DEFAULT_MAX_COPY_SIZE,
    ExclusionRules, Filter,
};
use serde::Deserialize;

use crate::error::ConfigError;

/// Filter configuration. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filename patterns (regular expressions) to skip, in match order.
    ///
    /// Replaces the built-in list when present.
    pub exclude: Vec<String>,

    /// Extensions whose content is copied in mirror mode.
    pub copy_extensions: Vec<String>,

    /// Largest file, in bytes, whose content is copied.
    pub max_copy_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            copy_extensions: DEFAULT_COPY_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_copy_size: DEFAULT_MAX_COPY_SIZE,
        }
    }
}

impl Config {
    /// Compile the configuration into a filter.
    ///
    /// # Errors
    ///
    /// * If an exclusion pattern is not a valid regular expression
    pub fn to_filter(&self) -> Result<Filter, ConfigError> {
        let exclusions = ExclusionRules::new(&self.exclude)?;
        let copy_policy = CopyPolicy::new(&self.copy_extensions, self.max_copy_size);
        Ok(Filter::new(exclusions, copy_policy))
    }
}

/// A configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// The file it was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}
