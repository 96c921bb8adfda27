//! Error types for inventory output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur opening or finishing an inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Failed to remove a previous database file.
    #[error("Failed to remove existing database {}: {source}", path.display())]
    RemoveExisting {
        /// The database path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to open the database.
    #[error("Failed to open database {}: {source}", path.display())]
    Open {
        /// The database path.
        path: PathBuf,
        /// The underlying database error.
        #[source]
        source: rusqlite::Error,
    },

    /// Database error while creating the schema or committing.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error while writing or flushing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
