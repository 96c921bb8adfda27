//! Traversal counters.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::time::Duration;

/// Counters accumulated by one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries visited, excluded and unsupported entries not counted.
    ///
    /// An entry whose subtree or sink failed still counts here.
    pub found: u64,
    /// Subtrees and entries skipped because of an error.
    pub skipped: u64,
    /// Wall-clock duration of the walk.
    pub elapsed: Duration,
}

impl WalkStats {
    /// Visited entries per second.
    #[must_use]
    pub fn entries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.found as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} files and dirs. Skipped {} files or directories because of an error. Time {:.1}s ({:.1} files per second)",
            self.found,
            self.skipped,
            self.elapsed.as_secs_f64(),
            self.entries_per_second()
        )
    }
}
