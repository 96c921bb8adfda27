//! Depth-first directory traversal with pluggable sinks.
//!
//! The walker reads one directory at a time, drops entries the
//! [`Filter`](filefind_filter::Filter) excludes, recurses into
//! subdirectories and hands every surviving entry to a [`Sink`]. Failures
//! below the root are counted and reported rather than aborting the walk,
//! unless [`ErrorPolicy::Abort`] is selected.
//!
//! # Example
//!
//! ```rust,ignore
//! use filefind_walk::{walk, ProgressReporter, WalkOptions};
//!
//! let mut reporter = ProgressReporter::new(std::io::stderr(), false);
//! let stats = walk(&root, &root, &mut sink, &WalkOptions::new(&filter), &mut reporter)?;
//! eprintln!("\n{stats}");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod entry;
mod error;
mod paths;
mod progress;
mod sink;
mod stats;
mod time;
mod walker;

pub use entry::{Entry, EntryKind};
pub use error::{RelativePathError, SinkError, WalkError};
pub use paths::{absolute_clean, relative_dir};
pub use progress::{ProgressReporter, WalkObserver};
pub use sink::Sink;
pub use stats::WalkStats;
pub use time::{format_local, to_local, unix_seconds};
pub use walker::{ErrorPolicy, WalkOptions, walk};
