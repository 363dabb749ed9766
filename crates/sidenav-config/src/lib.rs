//! Configuration management for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Order Sources
//!
//! The child ordering lives either inline in the `[order]` table or in an
//! external JSON file referenced by `docs.order_file`:
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//!
//! [policy]
//! unknown_keys = "warn"
//!
//! [order]
//! "" = ["javascript", "java"]
//! "javascript/beginners-guide" = ["01-introduction", "02-variables-and-types"]
//! ```
//!
//! When both sources configure the same path, the file entry wins.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sidenav_order::{OrderConfig, UnknownKeyPolicy};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the external order file path.
    pub order_file: Option<PathBuf>,
    /// Override the unknown-key policy.
    pub unknown_keys: Option<UnknownKeyPolicy>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Policy configuration.
    pub policy: PolicyConfig,
    /// Inline ordering table.
    order: HashMap<String, Vec<String>>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Merged ordering from the inline table and the order file (set after loading).
    #[serde(skip)]
    order_resolved: OrderConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    order_file: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// External JSON order file (`None` when ordering is inline only).
    pub order_file: Option<PathBuf>,
}

/// Policy configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// How the resolver treats configured keys with no matching child.
    pub unknown_keys: UnknownKeyPolicy,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Order file parsing error.
    #[error("Order file {}: {source}", .path.display())]
    OrderFile {
        /// Path to the JSON order file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The order file
    /// (if any) is read afterwards so a CLI-supplied path is honored.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting ordering table is malformed.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.load_order()?;
        config.validate()?;

        Ok(config)
    }

    /// The merged child ordering for the resolver.
    #[must_use]
    pub fn order(&self) -> &OrderConfig {
        &self.order_resolved
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(order_file) = &settings.order_file {
            self.docs_resolved.order_file = Some(order_file.clone());
        }
        if let Some(unknown_keys) = settings.unknown_keys {
            self.policy.unknown_keys = unknown_keys;
        }
    }

    /// Build the merged [`OrderConfig`] from the inline table and order file.
    fn load_order(&mut self) -> Result<(), ConfigError> {
        let mut merged = OrderConfig::from(self.order.clone());

        if let Some(path) = &self.docs_resolved.order_file {
            let content = std::fs::read_to_string(path)?;
            let from_file: OrderConfig =
                serde_json::from_str(&content).map_err(|source| ConfigError::OrderFile {
                    path: path.clone(),
                    source,
                })?;
            merged.merge(from_file);
        }

        self.order_resolved = merged;
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            policy: PolicyConfig::default(),
            order: HashMap::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                order_file: None,
            },
            order_resolved: OrderConfig::new(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
            order_file: self.docs.order_file.as_deref().map(|f| config_dir.join(f)),
        };
    }

    /// Validate configuration values.
    ///
    /// Checks that every ordering entry is well-formed. Called automatically
    /// at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (path, keys) in self.order_resolved.iter() {
            validate_order_path(path)?;
            validate_order_keys(path, keys)?;
        }
        Ok(())
    }
}

/// Validate one ordering entry's path key.
fn validate_order_path(path: &str) -> Result<(), ConfigError> {
    if path == OrderConfig::ROOT {
        return Ok(());
    }

    if path.starts_with('/') || path.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "order entry '{path}' must not begin or end with '/'"
        )));
    }

    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(ConfigError::Validation(format!(
                "order entry '{path}' contains an empty path segment"
            )));
        }
        if segment == "." || segment == ".." {
            return Err(ConfigError::Validation(format!(
                "order entry '{path}' contains a relative path segment"
            )));
        }
    }

    Ok(())
}

/// Validate one ordering entry's key list.
fn validate_order_keys(path: &str, keys: &[String]) -> Result<(), ConfigError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(keys.len());

    for key in keys {
        if key.is_empty() {
            return Err(ConfigError::Validation(format!(
                "order entry '{path}' contains an empty key"
            )));
        }
        if key.contains('/') {
            return Err(ConfigError::Validation(format!(
                "order entry '{path}' key '{key}' must name a direct child, not a path"
            )));
        }
        if !seen.insert(key) {
            return Err(ConfigError::Validation(format!(
                "order entry '{path}' lists key '{key}' more than once"
            )));
        }
    }

    Ok(())
}
