//! Path normalization and relative-path computation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::error::RelativePathError;

/// Make a path absolute against the current directory and clean it lexically.
///
/// Does not touch the filesystem, so the path need not exist.
///
/// # Errors
///
/// * If the current directory cannot be determined
pub fn absolute_clean(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(path_clean::clean(absolute))
}

/// Directory `dir` expressed relative to `base`.
///
/// Returns `.` when both are the same directory.
///
/// # Errors
///
/// * If `base` is not `dir` or one of its ancestors
pub fn relative_dir(base: &Path, dir: &Path) -> Result<PathBuf, RelativePathError> {
    let base_clean = path_clean::clean(base);
    let dir_clean = path_clean::clean(dir);

    let rel = dir_clean
        .strip_prefix(&base_clean)
        .map_err(|_| RelativePathError {
            base: base.to_path_buf(),
            path: dir.to_path_buf(),
        })?;

    if rel.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(rel.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_dir_same() {
        assert_eq!(
            relative_dir(Path::new("/data/src"), Path::new("/data/src")).unwrap(),
            PathBuf::from(".")
        );
    }

    #[test]
    fn test_relative_dir_nested() {
        assert_eq!(
            relative_dir(Path::new("/data/src"), Path::new("/data/src/a/b")).unwrap(),
            PathBuf::from("a/b")
        );
    }

    #[test]
    fn test_relative_dir_cleans_inputs() {
        assert_eq!(
            relative_dir(Path::new("/data/src/"), Path::new("/data/./src/x/../a")).unwrap(),
            PathBuf::from("a")
        );
    }

    #[test]
    fn test_relative_dir_not_ancestor() {
        let err = relative_dir(Path::new("/data/src"), Path::new("/data/other")).unwrap_err();
        assert_eq!(err.base, PathBuf::from("/data/src"));
        assert_eq!(err.path, PathBuf::from("/data/other"));

        assert!(relative_dir(Path::new("/data/src"), Path::new("/data/srcfoo")).is_err());
    }

    #[test]
    fn test_absolute_clean() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_clean(Path::new("a/../b")).unwrap(), cwd.join("b"));
        assert_eq!(
            absolute_clean(Path::new("/x/./y/")).unwrap(),
            PathBuf::from("/x/y")
        );
    }
}
