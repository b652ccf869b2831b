//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Namespace to show; empty or "all" for every namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Colour nodes by health
    #[serde(default)]
    pub color: bool,

    /// Kubeconfig file; the usual inference chain applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,
}

fn default_namespace() -> String {
    "all".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            color: false,
            kubeconfig: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.namespace, "all");
        assert!(!config.color);
        assert!(config.kubeconfig.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("namespace"));
        assert!(yaml.contains("color"));
        assert!(!yaml.contains("kubeconfig"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
namespace: kube-system
color: true
kubeconfig: /tmp/kubeconfig
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.namespace, "kube-system");
        assert!(config.color);
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/tmp/kubeconfig")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_yaml::from_str("color: true").unwrap();
        assert_eq!(config.namespace, "all");
        assert!(config.color);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<Config>("colour: true").is_err());
    }
}
