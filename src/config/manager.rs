use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> Result<Config> {
        Self::load_with_path(None)
    }

    /// Reads the config file if present. A missing file yields defaults and is
    /// never written back.
    pub fn load_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            Self::load_from_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            let config = default_config();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut original = default_config();
        original.remote.name = "upstream".to_string();
        original.hosting.pr_list_limit = 5;
        fs::write(&config_path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = ConfigManager::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let config = ConfigManager::load_with_path(Some(&config_path)).unwrap();
        assert_eq!(config, default_config());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let result = ConfigManager::load_with_path(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"remote": {"name": ""}}"#).unwrap();

        let result = ConfigManager::load_with_path(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
