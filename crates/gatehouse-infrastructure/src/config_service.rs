//! Configuration loading.
//!
//! Precedence, lowest to highest: built-in defaults, `config.toml`,
//! environment variables. Command-line flags are applied by the host on top.

use crate::paths::GatehousePaths;
use gatehouse_core::config::ClientConfig;
use gatehouse_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const BACKEND_URL_ENV: &str = "GATEHOUSE_BACKEND_URL";
pub const APP_NAME_ENV: &str = "GATEHOUSE_APP_NAME";

/// Loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Uses `~/.config/gatehouse/config.toml`.
    pub fn new() -> Result<Self> {
        let path = GatehousePaths::default().config_file()?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|p| p.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = load_config_file(&self.path)?;
        apply_overrides(&mut loaded, |name| std::env::var(name).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
        *write_lock = None;
    }
}

/// Reads a config file; a missing file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        tracing::debug!("[Config] No config file at {:?}, using defaults", path);
        return Ok(ClientConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;
    tracing::debug!("[Config] Loaded {:?}", path);
    Ok(config)
}

/// Applies environment overrides through `lookup`. Empty values are ignored.
pub fn apply_overrides(config: &mut ClientConfig, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(url) = lookup(BACKEND_URL_ENV) {
        config.backend_url = url;
    }
    if let Some(name) = lookup(APP_NAME_ENV) {
        config.app_name = name;
    }
}
