//! Configuration service implementation.
//!
//! Loads [`MusingConfig`] from `config.toml` (by default
//! `~/.config/musing/config.toml`) and caches it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use musing_core::config::MusingConfig;
use musing_core::error::Result;

use crate::paths::MusingPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing or empty file yields the defaults. A malformed file is an
/// error rather than a silent fallback, so typos in the config surface.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<MusingConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file location.
    pub fn new() -> Result<Self> {
        let path = MusingPaths::default().config_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading a custom config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<MusingConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<MusingConfig> {
        if !self.path.exists() {
            tracing::info!(
                "[ConfigService] No config at {}, using defaults",
                self.path.display()
            );
            return Ok(MusingConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(MusingConfig::default());
        }

        let config: MusingConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musing_core::settings::AiProvider;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.get_config().unwrap(), MusingConfig::default());
    }

    #[test]
    fn test_loads_and_caches_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            log_level = "debug"

            [journal]
            page_size_options = [5, 15, 30]

            [persona]
            max_avatar_bytes = 1024
            supported_providers = ["openai"]
            "#,
        )
        .unwrap();
        let service = ConfigService::with_path(path.clone());

        let config = service.get_config().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.journal.page_size_options, [5, 15, 30]);
        assert_eq!(config.journal.fallback_category, "General");
        assert_eq!(config.persona.supported_providers, vec![AiProvider::OpenAi]);

        // Cached until invalidated
        std::fs::write(&path, "log_level = \"warn\"").unwrap();
        assert_eq!(service.get_config().unwrap().log_level, "debug");
        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().log_level, "warn");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[journal\npage_size_options = ").unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(err.is_serialization());
    }
}
