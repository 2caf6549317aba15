//! Configuration management for screate.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Configuration for screate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JavaScript runtime used to execute init scripts
    pub runtime: Option<PathBuf>,

    /// Package manager override for init script installs
    pub package_manager: Option<String>,

    /// Log level
    pub loglevel: Option<String>,
}

impl Config {
    /// Load configuration from default locations.
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // Load from user config file
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                config.merge_from_file(&user_config_path)?;
            }
        }

        // Load from environment variables
        config.load_from_env();

        Ok(config)
    }

    /// Merge configuration from a file.
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;

        // Parse .screaterc format (key=value pairs)
        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                self.set(key.trim(), value.trim());
            }
        }

        Ok(())
    }

    /// Load configuration from environment variables.
    fn load_from_env(&mut self) {
        // SCREATE_CONFIG_* environment variables
        for (key, value) in std::env::vars() {
            if let Some(config_key) = key.strip_prefix("SCREATE_CONFIG_") {
                let config_key = config_key.to_lowercase().replace('_', "-");
                self.set(&config_key, &value);
            }
        }
    }

    /// Set a configuration value. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "runtime" => self.runtime = Some(PathBuf::from(value)),
            "package-manager" => self.package_manager = Some(value.to_string()),
            "loglevel" => self.loglevel = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Get the user config path.
fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".screaterc"))
}
