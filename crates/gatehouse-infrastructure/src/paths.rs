//! Path management for gatehouse configuration and state files.
//!
//! ```text
//! ~/.config/gatehouse/         # Config directory
//! ├── config.toml              # Client configuration
//! └── session.toml             # Persisted session (user, access_token)
//!
//! ~/.local/share/gatehouse/    # Data directory
//! └── logs/                    # Application logs
//!     └── gatehouse.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "gatehouse";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for gatehouse_core::GatehouseError {
    fn from(err: PathError) -> Self {
        gatehouse_core::GatehouseError::config(err.to_string())
    }
}

/// Resolves gatehouse paths, optionally under a custom base directory
/// (used by tests and by `--config` overrides).
#[derive(Debug, Clone, Default)]
pub struct GatehousePaths {
    base: Option<PathBuf>,
}

impl GatehousePaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// `~/.config/gatehouse/` unless a base directory was given.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// `~/.local/share/gatehouse/` unless a base directory was given.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}
