//! Low-level file operations used by the mirror sink.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filefind_walk::SinkError;
use filetime::FileTime;

/// Permission bits for created directories (before umask).
#[cfg(unix)]
const DIR_MODE: u32 = 0o770;

/// Create a directory and all missing ancestors.
///
/// # Errors
///
/// * If the directory cannot be created, e.g. a file is in the way
pub fn create_dir_all(path: &Path) -> Result<(), SinkError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| SinkError::DestinationCreate {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Create or truncate `target`, then fill it from `source` if `copy_content`.
///
/// Without content the target is left as a zero-byte placeholder. Returns
/// the number of bytes written.
///
/// # Errors
///
/// * If the target cannot be created
/// * If the source cannot be opened or read
pub fn write_proxy(source: &Path, target: &Path, copy_content: bool) -> Result<u64, SinkError> {
    let mut dest = File::create(target).map_err(|e| SinkError::DestinationCreate {
        path: target.to_path_buf(),
        source: e,
    })?;

    if !copy_content {
        log::trace!("Placeholder {}", target.display());
        return Ok(0);
    }

    let mut src = File::open(source).map_err(|e| SinkError::SourceRead {
        path: source.to_path_buf(),
        source: e,
    })?;

    let copied = io::copy(&mut src, &mut dest).map_err(|e| SinkError::Copy {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;

    log::trace!(
        "Copied {} bytes {} -> {}",
        copied,
        source.display(),
        target.display()
    );

    Ok(copied)
}

/// Set both access and modification time of `target` to `modified`.
///
/// # Errors
///
/// * If the timestamps cannot be set
pub fn set_times(target: &Path, modified: SystemTime) -> Result<(), SinkError> {
    let time = FileTime::from_system_time(modified);
    filetime::set_file_times(target, time, time).map_err(|e| SinkError::SetTimes {
        path: target.to_path_buf(),
        source: e,
    })
}
