//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use filefind_walk::ErrorPolicy;

/// CLI arguments for filefind.
#[derive(Debug, Parser)]
#[command(
    name = "filefind",
    about = "Mirror a directory tree or list every file in it",
    version
)]
pub struct Args {
    /// What to produce.
    #[command(subcommand)]
    pub command: Command,

    /// Print a line for every created file.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print a diagnostic line per entry instead of progress dots.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file with exclusion and copy rules.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Additional filename pattern to exclude (can be specified multiple times).
    #[arg(long = "exclude", short = 'x', global = true)]
    pub excludes: Vec<String>,

    /// Abort on the first entry that cannot be processed.
    #[arg(long, global = true)]
    pub fail_fast: bool,
}

impl Args {
    /// Failure handling selected by the flags.
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        if self.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::SkipAndContinue
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "error"
        }
    }
}

/// Output modes.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recreate the tree below a destination, copying only small text-like files.
    Mirror(MirrorArgs),

    /// Write one CSV row per file and directory to stdout.
    Csv(InventoryArgs),

    /// Insert one row per file and directory into an SQLite database.
    Sqlite(SqliteArgs),

    /// Write SQL statements creating and filling a `file` table to stdout.
    Sql(InventoryArgs),
}

/// Arguments for mirror mode.
#[derive(Debug, clap::Args)]
pub struct MirrorArgs {
    /// Source directory.
    #[arg(long, default_value = ".")]
    pub src: PathBuf,

    /// Destination directory.
    #[arg(long)]
    pub dest: PathBuf,

    /// Largest file, in bytes, whose content is copied.
    #[arg(long)]
    pub max_copy_size: Option<u64>,

    /// Additional extension whose content is copied (can be specified multiple times).
    #[arg(long = "copy-ext")]
    pub copy_extensions: Vec<String>,
}

/// Arguments shared by the inventory modes.
#[derive(Debug, clap::Args)]
pub struct InventoryArgs {
    /// Root directory to traverse.
    #[arg(long, visible_alias = "src", default_value = ".")]
    pub path: PathBuf,

    /// Base path to strip from directories; `/` keeps them absolute.
    #[arg(long, default_value = "/")]
    pub base: PathBuf,
}

/// Arguments for SQLite mode.
#[derive(Debug, clap::Args)]
pub struct SqliteArgs {
    #[command(flatten)]
    pub inventory: InventoryArgs,

    /// Database file, replaced if it exists.
    #[arg(long, default_value = "filefind.db")]
    pub db: PathBuf,
}
