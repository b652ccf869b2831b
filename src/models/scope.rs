//! Namespace filter for a single tree build

use std::fmt;

/// Which namespaces a build covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    Namespace(String),
}

impl Scope {
    /// Interpret a user supplied namespace; empty, `all` and `-A` select
    /// every namespace.
    pub fn parse(namespace: &str) -> Self {
        let namespace = namespace.trim();
        if namespace.is_empty() || namespace == "all" || namespace == "-A" {
            Scope::All
        } else {
            Scope::Namespace(namespace.to_string())
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Namespace(ns) => Some(ns),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all namespaces"),
            Scope::Namespace(ns) => write!(f, "namespace {}", ns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(Scope::parse(""), Scope::All);
        assert_eq!(Scope::parse("all"), Scope::All);
        assert_eq!(Scope::parse("-A"), Scope::All);
    }

    #[test]
    fn test_parse_namespace() {
        let scope = Scope::parse("kube-system");
        assert_eq!(scope, Scope::Namespace("kube-system".to_string()));
        assert_eq!(scope.namespace(), Some("kube-system"));
        assert_eq!(Scope::All.namespace(), None);
    }
}
