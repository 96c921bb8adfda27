//! Exclusion and copy-eligibility rules for filefind.
//!
//! This crate decides two things about a directory entry, using nothing but
//! its name, type and size:
//!
//! * Whether the entry is noise that should be skipped entirely
//!   (version-control directories, IDE settings, OS metadata)
//! * Whether a file's content is small and text-like enough to be copied
//!   when mirroring a tree
//!
//! # Example
//!
//! ```rust,ignore
//! use filefind_filter::Filter;
//!
//! let filter = Filter::default();
//! assert!(filter.should_exclude(".git"));
//! assert!(filter.is_copy_eligible("notes.txt", true, 1024));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod exclude;
mod policy;

pub use error::FilterError;
pub use exclude::{DEFAULT_EXCLUDE_PATTERNS, ExclusionRules};
pub use policy::{CopyPolicy, DEFAULT_COPY_EXTENSIONS, DEFAULT_MAX_COPY_SIZE, lowercase_extension};

/// Combined exclusion rules and copy policy.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Names that are skipped during traversal.
    pub exclusions: ExclusionRules,
    /// Which files get their content copied.
    pub copy_policy: CopyPolicy,
}

impl Filter {
    /// Create a filter from its two halves.
    #[must_use]
    pub const fn new(exclusions: ExclusionRules, copy_policy: CopyPolicy) -> Self {
        Self {
            exclusions,
            copy_policy,
        }
    }

    /// Whether an entry with this name should be skipped, subtree included.
    #[must_use]
    pub fn should_exclude(&self, name: &str) -> bool {
        self.exclusions.matches(name)
    }

    /// Whether a file's content should be copied.
    #[must_use]
    pub fn is_copy_eligible(&self, name: &str, is_regular_file: bool, size: u64) -> bool {
        self.copy_policy.is_eligible(name, is_regular_file, size)
    }
}
