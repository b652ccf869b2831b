//! Configuration system for kubetree
//!
//! A single optional YAML file plus environment overrides. Command-line
//! flags are layered on top by the binary.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::Config;

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "namespace" => Ok(config.namespace.clone()),
        "color" => Ok(config.color.to_string()),
        "kubeconfig" => Ok(config
            .kubeconfig
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "namespace" => {
            config.namespace = value.to_string();
        }
        "color" => {
            config.color = value.parse().context("color must be 'true' or 'false'")?;
        }
        "kubeconfig" => {
            config.kubeconfig = if value.is_empty() {
                None
            } else {
                Some(value.into())
            };
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        set_config_value(&mut config, "namespace", "apps").unwrap();
        set_config_value(&mut config, "color", "true").unwrap();
        set_config_value(&mut config, "kubeconfig", "/tmp/kc").unwrap();

        assert_eq!(get_config_value(&config, "namespace").unwrap(), "apps");
        assert_eq!(get_config_value(&config, "color").unwrap(), "true");
        assert_eq!(get_config_value(&config, "kubeconfig").unwrap(), "/tmp/kc");

        set_config_value(&mut config, "kubeconfig", "").unwrap();
        assert!(config.kubeconfig.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "color", "maybe").is_err());
        assert!(set_config_value(&mut config, "skin", "dark").is_err());
        assert!(get_config_value(&config, "skin").is_err());
    }
}
