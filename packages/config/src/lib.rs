//! Configuration loading for filefind.
//!
//! The configuration only covers the filter: which names are excluded and
//! which files have their content copied in mirror mode. It is read from a
//! TOML file, any key of which may be omitted:
//!
//! ```toml
//! exclude = ["\\.git", "node_modules"]
//! copy_extensions = ["txt", "md"]
//! max_copy_size = 51200
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use filefind_config::load_config;
//!
//! let loaded = load_config(None, &std::env::current_dir()?)?;
//! let filter = loaded.config.to_filter()?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{LOCAL_CONFIG_NAME, USER_CONFIG_PATH, discover_config};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{Config, LoadedConfig};

use std::path::Path;

/// Load the configuration.
///
/// An explicit path must exist. Without one, the discovered file is used if
/// there is any, else the built-in defaults.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
/// * `cwd` - Directory searched for a local config file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(cwd),
    };

    let Some(path) = path else {
        log::debug!("No config file found, using defaults");
        return Ok(LoadedConfig::default());
    };

    let config = load_toml_config(&path)?;

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}
