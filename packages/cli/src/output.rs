//! Terminal output formatting.
//!
//! Everything here goes to stderr; stdout is reserved for inventory data.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Colorize;
use filefind_mirror::MirrorStats;
use filefind_walk::WalkStats;

/// Print the end-of-run summary.
pub fn print_summary(stats: &WalkStats) {
    let line = stats.to_string();
    if stats.skipped > 0 {
        eprintln!("\n{}", line.yellow());
    } else {
        eprintln!("\n{line}");
    }
}

/// Print what mirror mode created.
pub fn print_mirror_stats(stats: &MirrorStats) {
    eprintln!(
        "{} {} files copied ({} bytes), {} placeholders, {} directories",
        "Mirror:".dimmed(),
        stats.files_copied,
        stats.bytes_copied,
        stats.placeholders,
        stats.directories
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
