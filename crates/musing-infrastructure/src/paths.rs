//! Path management for musing configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/musing/            # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "musing";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for musing_core::MusingError {
    fn from(err: PathError) -> Self {
        musing_core::MusingError::config(err.to_string())
    }
}

/// Resolves musing paths, optionally under a custom base directory.
///
/// With a base directory (tests, portable installs) every path lives under
/// it; without one the platform config directory is used.
#[derive(Debug, Clone, Default)]
pub struct MusingPaths {
    base_dir: Option<PathBuf>,
}

impl MusingPaths {
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the musing configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }
}
