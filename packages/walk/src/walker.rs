//! Recursive depth-first traversal.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use filefind_filter::Filter;

use crate::entry::{Entry, EntryKind};
use crate::error::{SinkError, WalkError};
use crate::progress::WalkObserver;
use crate::sink::Sink;
use crate::stats::WalkStats;

/// What to do when a subdirectory or a sink visit fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the failure, count it as skipped and carry on with siblings.
    #[default]
    SkipAndContinue,
    /// Stop the whole walk at the first failure.
    Abort,
}

/// Options for a walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions<'a> {
    /// Exclusion rules applied to every entry name.
    pub filter: &'a Filter,
    /// Failure handling below the root.
    pub error_policy: ErrorPolicy,
}

impl<'a> WalkOptions<'a> {
    /// Options with the default error policy.
    #[must_use]
    pub fn new(filter: &'a Filter) -> Self {
        Self {
            filter,
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Replace the error policy.
    #[must_use]
    pub const fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

/// Walk `root` depth-first, handing every surviving entry to `sink`.
///
/// Symbolic links are reported as entries but never followed. Relative
/// locations are computed against `base`, which must be `root` or one of
/// its ancestors.
///
/// # Errors
///
/// * If `root` cannot be opened or is not a directory
/// * If `root` itself cannot be listed
/// * If `base` is not an ancestor of `root`
/// * If anything below the root fails and the policy is [`ErrorPolicy::Abort`]
pub fn walk<S, O>(
    root: &Path,
    base: &Path,
    sink: &mut S,
    options: &WalkOptions<'_>,
    observer: &mut O,
) -> Result<WalkStats, WalkError>
where
    S: Sink + ?Sized,
    O: WalkObserver + ?Sized,
{
    log::debug!("Walking {} (base {})", root.display(), base.display());

    let metadata = fs::metadata(root).map_err(|e| WalkError::RootOpen {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(WalkError::RootOpen {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let start = Instant::now();
    let entries = read_entries(root).map_err(|e| match e {
        WalkError::DirectoryRead { path, source } => WalkError::RootOpen { path, source },
        other => other,
    })?;

    let mut walker = Walker {
        filter: options.filter,
        policy: options.error_policy,
        sink,
        observer,
        stats: WalkStats::default(),
        aborting: false,
    };
    walker.visit_entries(root, base, entries)?;

    let mut stats = walker.stats;
    stats.elapsed = start.elapsed();

    log::debug!("Walk finished: {} found, {} skipped", stats.found, stats.skipped);

    Ok(stats)
}

struct Walker<'w, S: ?Sized, O: ?Sized> {
    filter: &'w Filter,
    policy: ErrorPolicy,
    sink: &'w mut S,
    observer: &'w mut O,
    stats: WalkStats,
    /// Set once a failure has been reported and is unwinding under `Abort`.
    aborting: bool,
}

impl<S, O> Walker<'_, S, O>
where
    S: Sink + ?Sized,
    O: WalkObserver + ?Sized,
{
    fn traverse(&mut self, dir: &Path, base: &Path) -> Result<(), WalkError> {
        let entries = read_entries(dir)?;
        self.visit_entries(dir, base, entries)
    }

    fn visit_entries(&mut self, dir: &Path, base: &Path, entries: Vec<Entry>) -> Result<(), WalkError> {
        for entry in entries {
            if entry.kind == EntryKind::Other {
                self.observer.unsupported(&entry);
                continue;
            }

            if self.filter.should_exclude(&entry.name) {
                self.observer.excluded(&entry);
                continue;
            }

            if entry.is_dir() {
                if let Err(e) = self.traverse(&entry.path, base) {
                    if self.aborting {
                        return Err(e);
                    }
                    log::warn!("Failed to traverse {}: {e}", entry.path.display());
                    self.observer.traverse_failed(&entry.path, &e);
                    if self.policy == ErrorPolicy::Abort {
                        self.aborting = true;
                        return Err(e);
                    }
                    self.stats.skipped += 1;
                }
            }

            match self.sink.visit(dir, base, &entry) {
                Ok(()) => {}
                Err(SinkError::RelativePath(e)) => return Err(e.into()),
                Err(e) => {
                    log::warn!("Failed to process {}: {e}", entry.path.display());
                    self.observer.visit_failed(&entry.path, &e);
                    if self.policy == ErrorPolicy::Abort {
                        self.aborting = true;
                        return Err(WalkError::Sink {
                            path: entry.path.clone(),
                            source: e,
                        });
                    }
                    self.stats.skipped += 1;
                }
            }

            self.stats.found += 1;
            self.observer.visited(&entry, self.stats.found);
        }

        Ok(())
    }
}

/// List a directory completely, closing it before any child is processed.
///
/// Children that vanish between listing and `lstat` are dropped.
fn read_entries(dir: &Path) -> Result<Vec<Entry>, WalkError> {
    let read_error = |source: io::Error| WalkError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let listing = fs::read_dir(dir)
        .map_err(read_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;

    let mut entries = Vec::with_capacity(listing.len());
    for child in listing {
        match child.metadata() {
            Ok(metadata) => entries.push(Entry::from_metadata(dir, child.file_name(), &metadata)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} vanished during listing", child.path().display());
            }
            Err(e) => return Err(read_error(e)),
        }
    }

    Ok(entries)
}
