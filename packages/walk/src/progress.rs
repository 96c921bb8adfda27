//! Progress reporting during a walk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::Path;

use crate::entry::Entry;

/// Dots are printed every this many visited entries.
const DOT_EVERY: u64 = 1_000;
/// A line break every this many visited entries.
const LINE_EVERY: u64 = 100_000;
/// An extra blank line every this many visited entries.
const BLOCK_EVERY: u64 = 1_000_000;

/// Callbacks fired by the walker. All methods default to doing nothing.
pub trait WalkObserver {
    /// An entry was visited; `found` is the running count including it.
    fn visited(&mut self, _entry: &Entry, _found: u64) {}

    /// An entry of unsupported type (pipe, socket, device) was skipped.
    fn unsupported(&mut self, _entry: &Entry) {}

    /// An entry was skipped because its name is excluded.
    fn excluded(&mut self, _entry: &Entry) {}

    /// A subdirectory could not be traversed.
    fn traverse_failed(&mut self, _path: &Path, _error: &dyn std::error::Error) {}

    /// The sink failed on an entry.
    fn visit_failed(&mut self, _path: &Path, _error: &dyn std::error::Error) {}
}

impl WalkObserver for () {}

/// Writes progress dots, or per-entry lines in debug mode, to a writer.
///
/// Meant for stderr so it never mixes with data written to stdout. Write
/// failures are ignored.
#[derive(Debug)]
pub struct ProgressReporter<W: Write> {
    out: W,
    debug: bool,
}

impl<W: Write> ProgressReporter<W> {
    /// Create a reporter. With `debug` set, every entry gets its own line
    /// instead of dots.
    #[must_use]
    pub const fn new(out: W, debug: bool) -> Self {
        Self { out, debug }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn dots(&mut self, found: u64) {
        if found % DOT_EVERY == 0 {
            write!(self.out, ".").ok();
        }
        if found % LINE_EVERY == 0 {
            writeln!(self.out).ok();
        }
        if found % BLOCK_EVERY == 0 {
            writeln!(self.out).ok();
        }
        if found % DOT_EVERY == 0 {
            self.out.flush().ok();
        }
    }
}

impl<W: Write> WalkObserver for ProgressReporter<W> {
    fn visited(&mut self, entry: &Entry, found: u64) {
        if self.debug {
            writeln!(
                self.out,
                "{}{} {:o}\t{} ({})\tmod {}",
                u8::from(entry.is_dir()),
                u8::from(entry.is_symlink()),
                entry.mode,
                entry.path.display(),
                entry.size,
                entry.modified_local()
            )
            .ok();
        } else {
            self.dots(found);
        }
    }

    fn unsupported(&mut self, entry: &Entry) {
        log::debug!("Skipped {} entry {}", entry.kind, entry.path.display());
        if self.debug {
            writeln!(
                self.out,
                "\nSkipped non-file/-dir/-symlink: {}",
                entry.path.display()
            )
            .ok();
        }
    }

    fn excluded(&mut self, entry: &Entry) {
        log::debug!("Excluded {}", entry.path.display());
        if self.debug {
            writeln!(self.out, "\nExcluded: {}", entry.path.display()).ok();
        }
    }

    fn traverse_failed(&mut self, path: &Path, error: &dyn std::error::Error) {
        writeln!(self.out, "\nFailed to traverse '{}': {error}", path.display()).ok();
    }

    fn visit_failed(&mut self, path: &Path, error: &dyn std::error::Error) {
        writeln!(self.out, "\nFailed to process '{}': {error}", path.display()).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            file_name: OsString::from(name),
            name: name.to_string(),
            path: PathBuf::from("/data").join(name),
            kind,
            size: 42,
            modified: SystemTime::UNIX_EPOCH,
            mode: 0o100_644,
        }
    }

    fn output(reporter: ProgressReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_dots_every_thousand() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        let e = entry("a.txt", EntryKind::File);

        for found in 1..=2_500 {
            reporter.visited(&e, found);
        }

        assert_eq!(output(reporter), "..");
    }

    #[test]
    fn test_line_breaks() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        let e = entry("a.txt", EntryKind::File);

        reporter.visited(&e, 100_000);
        reporter.visited(&e, 1_000_000);

        assert_eq!(output(reporter), ".\n.\n\n");
    }

    #[test]
    fn test_debug_lines_replace_dots() {
        let mut reporter = ProgressReporter::new(Vec::new(), true);
        reporter.visited(&entry("sub", EntryKind::Directory), 1_000);

        let out = output(reporter);
        assert!(out.starts_with("10 100644\t/data/sub (42)\tmod "));
        assert!(!out.starts_with('.'));
    }

    #[test]
    fn test_exclusions_only_reported_in_debug() {
        let mut quiet = ProgressReporter::new(Vec::new(), false);
        quiet.excluded(&entry(".git", EntryKind::Directory));
        assert!(output(quiet).is_empty());

        let mut loud = ProgressReporter::new(Vec::new(), true);
        loud.excluded(&entry(".git", EntryKind::Directory));
        assert_eq!(output(loud), "\nExcluded: /data/.git\n");
    }

    #[test]
    fn test_failures_always_reported() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        reporter.traverse_failed(Path::new("/data/locked"), &error);

        assert_eq!(output(reporter), "\nFailed to traverse '/data/locked': denied\n");
    }
}
