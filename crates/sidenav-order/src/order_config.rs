//! Path-keyed ordering configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Editorial ordering intent: for each configured path, the exact order its
/// children should appear in.
///
/// The mapping is sparse. A path with no entry falls back to the loader's
/// default order; the resolver treats absence as a first-class case, not an
/// error. The root level is addressed by [`OrderConfig::ROOT`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderConfig {
    entries: HashMap<String, Vec<String>>,
}

impl OrderConfig {
    /// Reserved path key addressing the top-level categories.
    pub const ROOT: &'static str = "";

    /// Create an empty configuration (every path keeps default order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the child order for a path, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, keys: Vec<String>) {
        self.entries.insert(path.into(), keys);
    }

    /// Configured child order for a path, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Number of configured paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no path is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, keys)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(path, keys)| (path.as_str(), keys.as_slice()))
    }

    /// Merge another configuration into this one; `other` wins on conflict.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl From<HashMap<String, Vec<String>>> for OrderConfig {
    fn from(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_get_returns_configured_order() {
        let mut config = OrderConfig::new();
        config.insert("javascript", keys(&["beginners-guide", "advanced"]));

        assert_eq!(
            config.get("javascript"),
            Some(keys(&["beginners-guide", "advanced"]).as_slice())
        );
    }

    #[test]
    fn test_get_unconfigured_path_returns_none() {
        let config = OrderConfig::new();

        assert_eq!(config.get("javascript"), None);
    }

    #[test]
    fn test_root_entry_uses_reserved_key() {
        let mut config = OrderConfig::new();
        config.insert(OrderConfig::ROOT, keys(&["javascript", "java"]));

        assert_eq!(
            config.get(""),
            Some(keys(&["javascript", "java"]).as_slice())
        );
    }

    #[test]
    fn test_insert_replaces_previous_entry() {
        let mut config = OrderConfig::new();
        config.insert("java", keys(&["a"]));
        config.insert("java", keys(&["b"]));

        assert_eq!(config.get("java"), Some(keys(&["b"]).as_slice()));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_merge_other_wins_on_conflict() {
        let mut base = OrderConfig::new();
        base.insert("java", keys(&["a"]));
        base.insert("aem", keys(&["x"]));

        let mut other = OrderConfig::new();
        other.insert("java", keys(&["b"]));

        base.merge(other);

        assert_eq!(base.get("java"), Some(keys(&["b"]).as_slice()));
        assert_eq!(base.get("aem"), Some(keys(&["x"]).as_slice()));
    }

    #[test]
    fn test_deserialize_from_json_mapping() {
        let json = r#"{
            "": ["javascript", "java"],
            "javascript/beginners-guide": ["01-introduction", "02-variables-and-types"]
        }"#;

        let config: OrderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(
            config.get("javascript/beginners-guide"),
            Some(keys(&["01-introduction", "02-variables-and-types"]).as_slice())
        );
    }
}
