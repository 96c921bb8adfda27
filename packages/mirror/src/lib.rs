//! Mirror a directory tree as a lightweight skeleton.
//!
//! The mirror sink recreates every visited entry below a destination root:
//!
//! * Directories are created (empty ones included)
//! * Small files with an allow-listed extension are copied
//! * Every other file becomes a zero-byte placeholder with the same name
//! * Created files take the source modification time
//!
//! # Example
//!
//! ```rust,ignore
//! use filefind_mirror::MirrorSink;
//! use filefind_walk::{walk, WalkOptions};
//!
//! let mut sink = MirrorSink::new(dest, filter.copy_policy.clone());
//! let stats = walk(&src, &src, &mut sink, &WalkOptions::new(&filter), &mut ())?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod files;
mod sink;

pub use files::{create_dir_all, set_times, write_proxy};
pub use sink::{MirrorSink, MirrorStats};
