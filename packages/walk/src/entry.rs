//! Directory entries as seen by the walker.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::fmt;
use std::fs::{FileType, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::RelativePathError;
use crate::paths::relative_dir;
use crate::time::format_local;

/// What kind of filesystem node an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link (never followed).
    Symlink,
    /// A pipe, socket or device node.
    Other,
}

impl EntryKind {
    /// Classify a file type obtained without following symlinks.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "dir"),
            Self::Symlink => write!(f, "symlink"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One filesystem node encountered during traversal.
#[derive(Debug, Clone)]
pub struct Entry {
    /// File name as returned by the directory listing.
    pub file_name: OsString,
    /// File name, lossily converted for matching and output.
    pub name: String,
    /// Full path (parent directory joined with the name).
    pub path: PathBuf,
    /// Node kind.
    pub kind: EntryKind,
    /// Size in bytes (link length for symlinks).
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Unix permission bits and file type, 0 elsewhere.
    pub mode: u32,
}

impl Entry {
    /// Build an entry from a parent directory, a name and `lstat` metadata.
    #[must_use]
    pub fn from_metadata(dir: &Path, file_name: OsString, metadata: &Metadata) -> Self {
        let name = file_name.to_string_lossy().into_owned();
        let path = dir.join(&file_name);

        Self {
            file_name,
            name,
            path,
            kind: EntryKind::from_file_type(metadata.file_type()),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            mode: mode_bits(metadata),
        }
    }

    /// Whether this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Whether this entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Whether this entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Path of this entry relative to `base`.
    ///
    /// # Errors
    ///
    /// * If `base` is not an ancestor of the entry
    pub fn relative_path(&self, base: &Path) -> Result<PathBuf, RelativePathError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new(""));
        let dir = relative_dir(base, parent)?;
        Ok(if dir == Path::new(".") {
            PathBuf::from(&self.file_name)
        } else {
            dir.join(&self.file_name)
        })
    }

    /// Modification time in local time, `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Times without a four-digit year are rendered as epoch seconds.
    #[must_use]
    pub fn modified_local(&self) -> String {
        format_local(self.modified)
    }
}

#[cfg(unix)]
fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(not(unix))]
const fn mode_bits(_metadata: &Metadata) -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_metadata_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Notes.TXT"), "0123456789").unwrap();

        let metadata = fs::symlink_metadata(dir.path().join("Notes.TXT")).unwrap();
        let entry = Entry::from_metadata(dir.path(), OsString::from("Notes.TXT"), &metadata);

        assert_eq!(entry.name, "Notes.TXT");
        assert_eq!(entry.path, dir.path().join("Notes.TXT"));
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size, 10);
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_from_metadata_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let metadata = fs::symlink_metadata(dir.path().join("sub")).unwrap();
        let entry = Entry::from_metadata(dir.path(), OsString::from("sub"), &metadata);

        assert_eq!(entry.kind, EntryKind::Directory);
        assert!(entry.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_metadata_symlink_not_followed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("target"), dir.path().join("link")).unwrap();

        let metadata = fs::symlink_metadata(dir.path().join("link")).unwrap();
        let entry = Entry::from_metadata(dir.path(), OsString::from("link"), &metadata);

        assert_eq!(entry.kind, EntryKind::Symlink);
        assert!(entry.is_symlink());
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_relative_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/c.txt"), "c").unwrap();

        let parent = dir.path().join("a/b");
        let metadata = fs::symlink_metadata(parent.join("c.txt")).unwrap();
        let entry = Entry::from_metadata(&parent, OsString::from("c.txt"), &metadata);

        assert_eq!(
            entry.relative_path(dir.path()).unwrap(),
            PathBuf::from("a/b/c.txt")
        );
        assert_eq!(entry.relative_path(&parent).unwrap(), PathBuf::from("c.txt"));
        assert!(entry.relative_path(Path::new("/elsewhere")).is_err());
    }

    #[test]
    fn test_modified_local_format() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let metadata = fs::symlink_metadata(dir.path().join("a.txt")).unwrap();
        let entry = Entry::from_metadata(dir.path(), OsString::from("a.txt"), &metadata);
        let formatted = entry.modified_local();

        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_modified_local_out_of_range() {
        let entry = Entry {
            file_name: OsString::from("future.txt"),
            name: "future.txt".to_string(),
            path: PathBuf::from("/data/future.txt"),
            kind: EntryKind::File,
            size: 0,
            modified: SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(100_000_000_000_000),
            mode: 0,
        };

        assert_eq!(entry.modified_local(), "100000000000000");
    }
}
