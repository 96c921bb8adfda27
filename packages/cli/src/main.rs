//! filefind CLI entry point.
//!
//! Walks a directory tree and either mirrors it as a lightweight skeleton or
//! writes an inventory of every file and directory as CSV or SQL.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use args::{Args, Command, InventoryArgs, MirrorArgs};
use filefind_config::load_config;
use filefind_filter::Filter;
use filefind_inventory::{CsvSink, SqlScriptSink, SqliteSink};
use filefind_mirror::MirrorSink;
use filefind_walk::{ProgressReporter, WalkOptions, WalkStats, absolute_clean, walk};

fn main() {
    let args = Args::parse();

    // Set up logging
    if env::var_os("RUST_LOG").is_none() {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", args.log_level());
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let loaded = load_config(args.config.as_deref(), &cwd)?;
    if let Some(ref source) = loaded.source {
        log::info!("Using config {}", source.display());
    }

    let mut filter = loaded.config.to_filter()?;
    filter.exclusions.extend(&args.excludes)?;
    if let Command::Mirror(ref mirror) = args.command {
        apply_mirror_overrides(&mut filter, mirror);
    }

    let options = WalkOptions::new(&filter).with_error_policy(args.error_policy());
    let mut reporter = ProgressReporter::new(io::stderr(), args.debug);

    let stats = match args.command {
        Command::Mirror(ref mirror) => {
            let src = absolute_clean(&mirror.src)?;
            let dest = absolute_clean(&mirror.dest)?;
            check_mirror_paths(&src, &dest)?;

            let mut sink = MirrorSink::new(&dest, filter.copy_policy.clone());
            let stats = walk(&src, &src, &mut sink, &options, &mut reporter)?;
            output::print_mirror_stats(&sink.stats());
            stats
        }
        Command::Csv(ref inventory) => {
            let (root, base) = resolve_inventory(inventory)?;
            let mut sink = CsvSink::new(io::stdout().lock());
            let stats = walk(&root, &base, &mut sink, &options, &mut reporter)?;
            sink.finish()?;
            stats
        }
        Command::Sqlite(ref sqlite) => {
            let (root, base) = resolve_inventory(&sqlite.inventory)?;
            let mut sink = SqliteSink::create(&sqlite.db)?;
            let stats = walk(&root, &base, &mut sink, &options, &mut reporter)?;
            sink.finish()?;
            stats
        }
        Command::Sql(ref inventory) => {
            let (root, base) = resolve_inventory(inventory)?;
            let mut sink = SqlScriptSink::new(io::stdout().lock())?;
            let stats = walk(&root, &base, &mut sink, &options, &mut reporter)?;
            sink.finish()?;
            stats
        }
    };

    print_stats(&stats);
    Ok(())
}

/// Apply `--max-copy-size` and `--copy-ext` on top of the configured policy.
fn apply_mirror_overrides(filter: &mut Filter, mirror: &MirrorArgs) {
    if let Some(max_size) = mirror.max_copy_size {
        filter.copy_policy.set_max_size(max_size);
    }
    filter.copy_policy.add_extensions(&mirror.copy_extensions);
}

/// A destination inside the source would be walked while it is written.
///
/// Symlinks are resolved first so a link into the source is caught too.
fn check_mirror_paths(src: &Path, dest: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if resolve_existing(dest)?.starts_with(resolve_existing(src)?) {
        return Err(format!(
            "Destination {} must not be inside source {}",
            dest.display(),
            src.display()
        )
        .into());
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-append the
/// components that do not exist yet.
fn resolve_existing(path: &Path) -> io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(resolved) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(resolved, |resolved, name| resolved.join(name)));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                    return Err(e);
                };
                missing.push(name);
                existing = parent;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Absolute, cleaned root and base paths for an inventory run.
fn resolve_inventory(inventory: &InventoryArgs) -> io::Result<(PathBuf, PathBuf)> {
    Ok((
        absolute_clean(&inventory.path)?,
        absolute_clean(&inventory.base)?,
    ))
}

fn print_stats(stats: &WalkStats) {
    log::debug!("{stats:?}");
    output::print_summary(stats);
}
