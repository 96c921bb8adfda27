//! The `file` table.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Creates the inventory table.
pub const CREATE_FILE_TABLE: &str = r"CREATE TABLE file (
    base       TEXT NOT NULL,
    name       TEXT NOT NULL,
    ext        TEXT NOT NULL,    -- always lowercase
    is_dir     INTEGER NOT NULL, -- 0: false, 1: true
    is_symlink INTEGER NOT NULL, -- 0: false, 1: true
    size       INTEGER NOT NULL,
    modified   INTEGER NOT NULL  -- Unix time (seconds)
);";

/// Inserts one row, parameters in column order.
pub const INSERT_FILE: &str = "INSERT INTO file(base, name, ext, is_dir, is_symlink, size, modified) VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7)";
