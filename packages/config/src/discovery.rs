//! Configuration file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Config file looked for in the working directory.
pub const LOCAL_CONFIG_NAME: &str = "filefind.toml";

/// Config file looked for below the user configuration directory.
pub const USER_CONFIG_PATH: &str = "filefind/config.toml";

/// Find the configuration file to use when none is given explicitly.
///
/// Looks for `filefind.toml` in `cwd`, then `filefind/config.toml` in the
/// platform's user configuration directory.
#[must_use]
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    candidates(cwd, dirs::config_dir().as_deref())
        .into_iter()
        .find(|path| path.is_file())
}

fn candidates(cwd: &Path, user_config_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(LOCAL_CONFIG_NAME)];
    if let Some(dir) = user_config_dir {
        paths.push(dir.join(USER_CONFIG_PATH));
    }
    log::trace!("Config candidates: {paths:?}");
    paths
}
