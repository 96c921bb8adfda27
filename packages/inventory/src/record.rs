//! One inventory row.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::time::SystemTime;

use filefind_filter::lowercase_extension;
use filefind_walk::{Entry, RelativePathError, format_local, relative_dir, unix_seconds};

/// Metadata of one entry, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Containing directory: absolute when the base is `/`, else relative to it.
    pub dir: String,
    /// File name.
    pub name: String,
    /// Lowercase extension without the dot.
    pub ext: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry is a symbolic link.
    pub is_symlink: bool,
    /// Size in bytes.
    pub size: u64,
    /// Modification time.
    pub modified: SystemTime,
}

impl Record {
    /// Build a record for an entry found in `dir`.
    ///
    /// # Errors
    ///
    /// * If `base` is not `/` and not an ancestor of `dir`
    pub fn from_entry(dir: &Path, base: &Path, entry: &Entry) -> Result<Self, RelativePathError> {
        let dir = if base == Path::new("/") {
            dir.to_string_lossy().into_owned()
        } else {
            relative_dir(base, dir)?.to_string_lossy().into_owned()
        };

        Ok(Self {
            dir,
            name: entry.name.clone(),
            ext: lowercase_extension(&entry.name),
            is_dir: entry.is_dir(),
            is_symlink: entry.is_symlink(),
            size: entry.size,
            modified: entry.modified,
        })
    }

    /// Local modification time as `'YYYY-MM-DD HH:MM:SS'`, quotes included.
    #[must_use]
    pub fn modified_text(&self) -> String {
        format!("'{}'", format_local(self.modified))
    }

    /// Modification time in whole seconds since the Unix epoch.
    #[must_use]
    pub fn modified_unix(&self) -> i64 {
        unix_seconds(self.modified)
    }

    /// Size as an SQL integer, saturating.
    #[must_use]
    pub fn size_i64(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }

    /// The record as text fields in column order.
    #[must_use]
    pub fn fields(&self) -> [String; 7] {
        [
            self.dir.clone(),
            self.name.clone(),
            self.ext.clone(),
            u8::from(self.is_dir).to_string(),
            u8::from(self.is_symlink).to_string(),
            self.size.to_string(),
            self.modified_text(),
        ]
    }
}
