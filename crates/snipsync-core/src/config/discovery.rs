//! Configuration file discovery

use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Pick the config file to load
    ///
    /// An explicit path from the CLI always wins, even if it does not exist,
    /// so the caller gets a clear error instead of a silent fallback.
    #[must_use]
    pub fn locate(cli_path: Option<&Path>) -> PathBuf {
        cli_path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
    }
}
