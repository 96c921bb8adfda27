//! Plain-text SQL output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{BufWriter, Write};
use std::path::Path;

use filefind_walk::{Entry, Sink, SinkError};

use crate::error::InventoryError;
use crate::record::Record;
use crate::schema::CREATE_FILE_TABLE;

/// Escape a string for a single-quoted SQL literal.
#[must_use]
pub fn escape_sql(value: &str) -> String {
    value.replace('\'', "''")
}

/// Prints the `file` table schema followed by one `INSERT` per entry.
///
/// No database is involved; the output can be replayed later.
pub struct SqlScriptSink<W: Write> {
    out: BufWriter<W>,
    rows: u64,
}

impl<W: Write> SqlScriptSink<W> {
    /// Create a sink and write the `CREATE TABLE` statement.
    ///
    /// # Errors
    ///
    /// * If the schema cannot be written
    pub fn new(out: W) -> Result<Self, InventoryError> {
        let mut out = BufWriter::new(out);
        writeln!(out, "{CREATE_FILE_TABLE}")?;
        Ok(Self { out, rows: 0 })
    }

    /// Statements written so far, schema excluded.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush buffered statements and give back the writer.
    ///
    /// # Errors
    ///
    /// * If flushing fails
    pub fn finish(self) -> Result<W, InventoryError> {
        log::debug!("Flushing {} INSERT statements", self.rows);
        self.out
            .into_inner()
            .map_err(|e| InventoryError::Io(e.into_error()))
    }

    fn write_insert(&mut self, record: &Record) -> std::io::Result<()> {
        writeln!(
            self.out,
            "INSERT INTO file(base, name, ext, is_dir, is_symlink, size, modified) VALUES('{}', '{}', '{}', {}, {}, {}, {});",
            escape_sql(&record.dir),
            escape_sql(&record.name),
            escape_sql(&record.ext),
            u8::from(record.is_dir),
            u8::from(record.is_symlink),
            record.size,
            record.modified_text()
        )
    }
}

impl<W: Write> Sink for SqlScriptSink<W> {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        let record = Record::from_entry(dir, base, entry)?;

        self.write_insert(&record).map_err(|e| SinkError::Output {
            path: entry.path.clone(),
            source: Box::new(e),
        })?;

        self.rows += 1;
        Ok(())
    }
}
