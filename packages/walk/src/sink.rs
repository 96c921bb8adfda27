//! The consumer side of a traversal.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::entry::Entry;
use crate::error::SinkError;

/// Receives every entry that survives filtering.
///
/// `dir` is the directory containing the entry and `base` the path that
/// relative locations are computed against. Directories are visited after
/// their subtree.
pub trait Sink {
    /// Process one entry.
    ///
    /// # Errors
    ///
    /// * If the entry's output side effect fails
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        (**self).visit(dir, base, entry)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        (**self).visit(dir, base, entry)
    }
}
