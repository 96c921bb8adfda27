//! SQLite inventory output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use filefind_walk::{Entry, Sink, SinkError};
use rusqlite::{Connection, params};

use crate::error::InventoryError;
use crate::record::Record;
use crate::schema::{CREATE_FILE_TABLE, INSERT_FILE};

/// Inserts one row per entry into a fresh `file` table.
///
/// All inserts run inside one transaction that [`finish`](Self::finish)
/// commits. Dropping the sink without finishing rolls everything back.
#[derive(Debug)]
pub struct SqliteSink {
    conn: Connection,
    rows: u64,
}

impl SqliteSink {
    /// Create a new database at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// * If an existing file cannot be removed
    /// * If the database cannot be opened or the schema created
    pub fn create(path: &Path) -> Result<Self, InventoryError> {
        match fs::remove_file(path) {
            Ok(()) => log::debug!("Removed existing database {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(InventoryError::RemoveExisting {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }

        let conn = Connection::open(path).map_err(|e| InventoryError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::with_connection(conn)
    }

    /// Create the schema on an already open, empty database.
    ///
    /// # Errors
    ///
    /// * If the schema cannot be created or the transaction started
    pub fn with_connection(conn: Connection) -> Result<Self, InventoryError> {
        conn.execute_batch(CREATE_FILE_TABLE)?;
        conn.execute_batch("BEGIN TRANSACTION")?;
        Ok(Self { conn, rows: 0 })
    }

    /// Rows inserted so far.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Commit the transaction and give back the connection.
    ///
    /// # Errors
    ///
    /// * If the commit fails
    pub fn finish(self) -> Result<Connection, InventoryError> {
        log::debug!("Committing {} rows", self.rows);
        self.conn.execute_batch("COMMIT")?;
        Ok(self.conn)
    }

    fn insert(&self, record: &Record) -> rusqlite::Result<()> {
        let mut stmt = self.conn.prepare_cached(INSERT_FILE)?;
        stmt.execute(params![
            record.dir,
            record.name,
            record.ext,
            record.is_dir,
            record.is_symlink,
            record.size_i64(),
            record.modified_unix(),
        ])?;
        Ok(())
    }
}

impl Sink for SqliteSink {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        let record = Record::from_entry(dir, base, entry)?;

        self.insert(&record).map_err(|e| SinkError::Output {
            path: entry.path.clone(),
            source: Box::new(e),
        })?;

        self.rows += 1;
        Ok(())
    }
}
