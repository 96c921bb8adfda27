//! CSV inventory output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::Path;

use filefind_walk::{Entry, Sink, SinkError};

use crate::error::InventoryError;
use crate::record::Record;

/// Writes one CSV row per entry, without a header.
///
/// Output is buffered; call [`finish`](Self::finish) to flush it.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl<W: Write> CsvSink<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
            rows: 0,
        }
    }

    /// Rows written so far.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush buffered rows and give back the writer.
    ///
    /// # Errors
    ///
    /// * If flushing fails
    pub fn finish(self) -> Result<W, InventoryError> {
        log::debug!("Flushing {} CSV rows", self.rows);
        self.writer
            .into_inner()
            .map_err(|e| InventoryError::Io(e.into_error()))
    }
}

impl<W: Write> Sink for CsvSink<W> {
    fn visit(&mut self, dir: &Path, base: &Path, entry: &Entry) -> Result<(), SinkError> {
        let record = Record::from_entry(dir, base, entry)?;

        self.writer
            .write_record(record.fields())
            .map_err(|e| SinkError::Output {
                path: entry.path.clone(),
                source: Box::new(e),
            })?;

        self.rows += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filefind_filter::Filter;
    use filefind_walk::{WalkOptions, walk};
    use std::fs;
    use tempfile::TempDir;

    fn inventory(root: &Path, base: &Path) -> (Vec<Vec<String>>, u64) {
        let filter = Filter::default();
        let mut sink = CsvSink::new(Vec::new());
        let stats = walk(root, base, &mut sink, &WalkOptions::new(&filter), &mut ()).unwrap();
        assert_eq!(sink.rows(), stats.found);

        let bytes = sink.finish().unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        let mut rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        rows.sort();
        (rows, stats.found)
    }

    #[test]
    fn test_csv_rows_for_files_and_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a/b.txt"), "0123456789").unwrap();
        fs::write(dir.path().join("a/c.bin"), "0123456789").unwrap();

        let (rows, found) = inventory(dir.path(), dir.path());

        assert_eq!(found, 3);
        assert_eq!(rows.len(), 3);

        assert_eq!(&rows[0][..5], &[".", "a", "", "1", "0"]);
        assert_eq!(&rows[1][..6], &["a", "b.txt", "txt", "0", "0", "10"]);
        assert_eq!(&rows[2][..6], &["a", "c.bin", "bin", "0", "0", "10"]);
        assert!(rows.iter().all(|r| r.len() == 7 && r[6].starts_with('\'')));
    }

    #[test]
    fn test_csv_absolute_dirs_with_root_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.md"), "x").unwrap();

        let (rows, _) = inventory(dir.path(), Path::new("/"));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], dir.path().to_string_lossy());
    }

    #[test]
    fn test_csv_quotes_awkward_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a, \"quoted\".txt"), "x").unwrap();

        let (rows, _) = inventory(dir.path(), dir.path());

        assert_eq!(rows[0][1], "a, \"quoted\".txt");
    }

    #[test]
    fn test_csv_excluded_subtree_has_no_rows() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".idea/inner")).unwrap();
        fs::write(dir.path().join(".idea/inner/workspace.xml"), "<x/>").unwrap();
        fs::write(dir.path().join("keep.txt"), "k").unwrap();

        let (rows, found) = inventory(dir.path(), dir.path());

        assert_eq!(found, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "keep.txt");
    }
}
