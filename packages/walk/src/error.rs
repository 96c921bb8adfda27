//! Error types for traversal and sinks.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// The base path is not an ancestor of a directory being visited.
#[derive(Debug, Error)]
#[error("Base {} is not an ancestor of {}", base.display(), path.display())]
pub struct RelativePathError {
    /// The base path.
    pub base: PathBuf,
    /// The path that should have been below it.
    pub path: PathBuf,
}

/// Errors that can occur while a sink processes one entry.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Relative path computation failed.
    #[error(transparent)]
    RelativePath(#[from] RelativePathError),

    /// Failed to create a destination directory or file.
    #[error("Failed to create {}: {source}", path.display())]
    DestinationCreate {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to open a source file for reading.
    #[error("Failed to open {}: {source}", path.display())]
    SourceRead {
        /// The source path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy file content.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    Copy {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to set file timestamps.
    #[error("Failed to set times on {}: {source}", path.display())]
    SetTimes {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output record.
    #[error("Failed to write record for {}: {source}", path.display())]
    Output {
        /// The entry the record describes.
        path: PathBuf,
        /// The underlying writer or database error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors that end a traversal (or one branch of it).
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root path is missing, unreadable or not a directory.
    #[error("Failed to open root {}: {source}", path.display())]
    RootOpen {
        /// The root path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Relative path computation failed for this branch.
    #[error(transparent)]
    RelativePath(#[from] RelativePathError),

    /// A sink failed and the error policy is [`Abort`](crate::ErrorPolicy::Abort).
    #[error("Failed to process {}: {source}", path.display())]
    Sink {
        /// The entry being processed.
        path: PathBuf,
        /// The sink error.
        #[source]
        source: SinkError,
    },
}
