//! Flat inventories of a directory tree.
//!
//! Every visited entry, directories included, becomes one [`Record`]. Three
//! sinks serialize records:
//!
//! * [`CsvSink`] - CSV rows
//! * [`SqliteSink`] - rows in a `file` table of an SQLite database, written
//!   in a single transaction
//! * [`SqlScriptSink`] - `CREATE TABLE` plus `INSERT` statements as text, for
//!   replay into any SQL database later

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod csv_sink;
mod error;
mod record;
mod schema;
mod script;
mod sqlite;

pub use csv_sink::CsvSink;
pub use error::InventoryError;
pub use record::Record;
pub use schema::{CREATE_FILE_TABLE, INSERT_FILE};
pub use script::{SqlScriptSink, escape_sql};
pub use sqlite::SqliteSink;
