//! Configuration loading and merging logic
//!
//! Precedence order (highest to lowest):
//! 1. Command-line flags (applied by the binary)
//! 2. Environment variable overrides
//! 3. Config file
//! 4. Built-in defaults

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::apply_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file, if there is one
    pub fn validate() -> Result<()> {
        let path = paths::root_config_path();
        if path.exists() {
            Self::load_file(&path)?;
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply `KUBETREE_*` overrides read through `var`
    fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(namespace) = var("KUBETREE_NAMESPACE") {
            config.namespace = namespace;
        }

        if let Some(color) = var("KUBETREE_COLOR") {
            match color.parse::<bool>() {
                Ok(val) => config.color = val,
                Err(_) => tracing::warn!("Ignoring KUBETREE_COLOR={}, expected true or false", color),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
