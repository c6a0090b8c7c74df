//! Environment snapshots for service-binding lookups.
//!
//! Cloud Foundry hands applications their bound services as environment
//! variables. The parsers in this workspace never read the process
//! environment directly; they take an [`EnvSource`] so that tests can supply
//! a snapshot built from plain key/value pairs.
//!
//! # Example
//!
//! ```rust
//! use cfbind_env::{EnvSource, MapEnvSource};
//!
//! let env = MapEnvSource::new().set("DATABASE_URL", "mysql://u:p@localhost:3306/app");
//! assert!(env.contains("DATABASE_URL"));
//! assert_eq!(env.get("MISSING"), None);
//! ```

use std::collections::HashMap;

/// A read-only view of environment variables.
///
/// Implementations never mutate the underlying store; a lookup is the only
/// operation the binding parsers perform.
pub trait EnvSource: Send + Sync {
    /// Get the value of a variable, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Check whether a variable is set.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An environment snapshot backed by a map, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for MapEnvSource {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_get() {
        let env = MapEnvSource::new().set("HOST", "localhost").set("PORT", "5432");

        assert_eq!(env.get("HOST"), Some("localhost".to_string()));
        assert_eq!(env.get("PORT"), Some("5432".to_string()));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_map_source_contains() {
        let env = MapEnvSource::new().set("HOST", "localhost").set("EMPTY", "");

        assert!(env.contains("HOST"));
        // An empty value still counts as set; callers decide what empty means.
        assert!(env.contains("EMPTY"));
        assert!(!env.contains("MISSING"));
    }

    #[test]
    fn test_map_source_from_iter() {
        let env: MapEnvSource = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(env.get("A"), Some("1".to_string()));
        assert_eq!(env.get("B"), Some("2".to_string()));
    }

    #[test]
    fn test_hashmap_source() {
        let mut vars = HashMap::new();
        vars.insert("HOST".to_string(), "localhost".to_string());

        assert_eq!(EnvSource::get(&vars, "HOST"), Some("localhost".to_string()));
        assert!(!EnvSource::contains(&vars, "MISSING"));
    }

    #[test]
    fn test_std_source_missing() {
        let env = StdEnvSource;
        assert_eq!(env.get("CFBIND_TEST_SURELY_NOT_SET"), None);
    }
}
