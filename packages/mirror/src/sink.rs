//! Sink that mirrors a tree as placeholders plus small copied files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use filefind_filter::CopyPolicy;
use filefind_walk::{Entry, Sink, SinkError, relative_dir};

use crate::files::{create_dir_all, set_times, write_proxy};

/// Counters kept by the mirror sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Files whose content was copied.
    pub files_copied: u64,
    /// Files created empty.
    pub placeholders: u64,
    /// Directories created.
    pub directories: u64,
    /// Bytes copied.
    pub bytes_copied: u64,
}

/// Recreates every visited entry below a destination directory.
///
/// Files whose extension and size pass the [`CopyPolicy`] are copied, every
/// other file (symlinks included) becomes an empty file of the same name.
/// All created files take the source modification time.
#[derive(Debug)]
pub struct MirrorSink {
    dest: PathBuf,
    policy: CopyPolicy,
    stats: MirrorStats,
}

impl MirrorSink {
    /// Create a sink writing below `dest`.
    #[must_use]
    pub fn new(dest: impl Into<PathBuf>, policy: CopyPolicy) -> Self {
        Self {
            dest: dest.into(),
            policy,
            stats: MirrorStats::default(),
        }
    }

    /// The destination root.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// What has been created so far.
    #[must_use]
    pub const fn stats(&self) -> MirrorStats {
        self.stats
    }

    fn dest_dir(&self, base: &Path, dir: &Path) -> Result<PathBuf, SinkError> {
        let rel = relative_dir(base, dir)?;
        Ok(if rel == Path::new(".") {
            self.dest.clone()
        } else {
            self.dest.join(rel)
        })
    }
}

impl Sink for MirrorSink {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        let dest_dir = self.dest_dir(base, dir)?;
        create_dir_all(&dest_dir)?;

        let target = dest_dir.join(&entry.file_name);

        if entry.is_dir() {
            create_dir_all(&target)?;
            self.stats.directories += 1;
            log::debug!("Created directory {}", target.display());
            return Ok(());
        }

        let eligible = self
            .policy
            .is_eligible(&entry.name, entry.is_file(), entry.size);
        let copied = write_proxy(&entry.path, &target, eligible)?;

        set_times(&target, entry.modified)?;

        if eligible {
            self.stats.files_copied += 1;
            self.stats.bytes_copied += copied;
        } else {
            self.stats.placeholders += 1;
        }

        log::info!("Created {}", target.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filefind_filter::Filter;
    use filefind_walk::{WalkOptions, walk};
    use filetime::FileTime;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn mirror(src: &Path, dest: &Path) -> (MirrorStats, filefind_walk::WalkStats) {
        let filter = Filter::default();
        let mut sink = MirrorSink::new(dest, filter.copy_policy.clone());
        let stats = walk(src, src, &mut sink, &WalkOptions::new(&filter), &mut ()).unwrap();
        (sink.stats(), stats)
    }

    #[test]
    fn test_mirror_copies_eligible_and_stubs_the_rest() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("a")).unwrap();
        fs::write(src.join("a/b.txt"), "0123456789").unwrap();
        fs::write(src.join("a/c.bin"), "0123456789").unwrap();

        let (mirror_stats, walk_stats) = mirror(&src, &dest);

        assert_eq!(fs::read(dest.join("a/b.txt")).unwrap(), b"0123456789");
        assert_eq!(fs::metadata(dest.join("a/c.bin")).unwrap().len(), 0);
        assert_eq!(walk_stats.found, 3);
        assert_eq!(mirror_stats.files_copied, 1);
        assert_eq!(mirror_stats.placeholders, 1);
        assert_eq!(mirror_stats.bytes_copied, 10);
    }

    #[test]
    fn test_mirror_oversized_file_is_placeholder() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("big.txt"), vec![b'x'; 50 * 1024 + 1]).unwrap();
        fs::write(src.join("limit.txt"), vec![b'x'; 50 * 1024]).unwrap();

        mirror(&src, &dest);

        assert_eq!(fs::metadata(dest.join("big.txt")).unwrap().len(), 0);
        assert_eq!(fs::metadata(dest.join("limit.txt")).unwrap().len(), 50 * 1024);
    }

    #[test]
    fn test_mirror_preserves_structure() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("x/y/z")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("x/y/file.md"), "# doc").unwrap();

        let (mirror_stats, _) = mirror(&src, &dest);

        assert!(dest.join("x").is_dir());
        assert!(dest.join("x/y").is_dir());
        assert!(dest.join("x/y/z").is_dir());
        assert!(dest.join("empty").is_dir());
        assert!(dest.join("x/y/file.md").is_file());
        assert_eq!(mirror_stats.directories, 4);
    }

    #[test]
    fn test_mirror_skips_excluded_subtrees() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("project/.git/refs")).unwrap();
        fs::write(src.join("project/.git/refs/main"), "abc").unwrap();
        fs::write(src.join("project/readme.txt"), "hi").unwrap();
        fs::write(src.join("project/.DS_Store"), "junk").unwrap();

        mirror(&src, &dest);

        assert!(dest.join("project/readme.txt").exists());
        assert!(!dest.join("project/.git").exists());
        assert!(!dest.join("project/.DS_Store").exists());
    }

    #[test]
    fn test_mirror_sets_modification_time() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("old.txt"), "old").unwrap();
        fs::write(src.join("old.bin"), "old").unwrap();
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        let time = FileTime::from_system_time(modified);
        filetime::set_file_times(src.join("old.txt"), time, time).unwrap();
        filetime::set_file_times(src.join("old.bin"), time, time).unwrap();

        mirror(&src, &dest);

        for name in ["old.txt", "old.bin"] {
            let meta = fs::metadata(dest.join(name)).unwrap();
            assert_eq!(FileTime::from_last_modification_time(&meta), time);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_mirror_symlink_becomes_placeholder() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("real.txt"), "content").unwrap();
        std::os::unix::fs::symlink(src.join("real.txt"), src.join("link.txt")).unwrap();

        mirror(&src, &dest);

        let meta = fs::symlink_metadata(dest.join("link.txt")).unwrap();
        assert!(meta.file_type().is_file());
        assert_eq!(meta.len(), 0);
    }

    #[test]
    fn test_mirror_destination_blocked_is_counted() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("sub/a.txt"), "a").unwrap();
        fs::write(src.join("b.txt"), "b").unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("sub"), "file in the way").unwrap();

        let (_, walk_stats) = mirror(&src, &dest);

        assert_eq!(walk_stats.found, 3);
        assert_eq!(walk_stats.skipped, 2);
        assert_eq!(fs::read_to_string(dest.join("b.txt")).unwrap(), "b");
    }
}
