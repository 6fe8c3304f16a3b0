//! Configuration management for jsxpragma
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `JSXPRAGMA_VENDOR_DIRS`: Comma-separated directory names marking third-party
//!   code - default: "node_modules"
//! - `JSXPRAGMA_MANIFEST_NAME`: Package manifest file name - default: "package.json"
//! - `JSXPRAGMA_CACHE_ENABLED`: Cache parsed manifests (true|false) - default: "true"
//!
//! Logging settings are read separately by [`crate::util::logging`].
//!
//! # Example
//!
//! ```no_run
//! use jsxpragma::JsxPragmaConfig;
//!
//! let config = JsxPragmaConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::fs::FileSystem;
use crate::package::PackageLoader;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use thiserror::Error;

const DEFAULT_VENDOR_DIR: &str = "node_modules";
const DEFAULT_MANIFEST_NAME: &str = crate::package::DEFAULT_MANIFEST_NAME;
const DEFAULT_CACHE_ENABLED: bool = true;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxPragmaConfig {
    /// Path components that mark an asset as vendored
    pub vendor_dirs: Vec<String>,

    /// File name of the package manifest searched for above each asset
    pub manifest_name: String,

    /// Reuse parsed manifests across assets
    pub cache_enabled: bool,
}

impl Default for JsxPragmaConfig {
    /// Loads from `JSXPRAGMA_*` environment variables, falling back to defaults
    fn default() -> Self {
        let vendor_dirs = env::var("JSXPRAGMA_VENDOR_DIRS")
            .ok()
            .map(|v| parse_list(&v))
            .unwrap_or_else(|| vec![DEFAULT_VENDOR_DIR.to_string()]);

        let manifest_name = env::var("JSXPRAGMA_MANIFEST_NAME")
            .ok()
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());

        let cache_enabled = env::var("JSXPRAGMA_CACHE_ENABLED")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_CACHE_ENABLED);

        Self {
            vendor_dirs,
            manifest_name,
            cache_enabled,
        }
    }
}

impl JsxPragmaConfig {
    /// Checks that the manifest name is a bare file name and that vendor
    /// directory names are non-empty single components.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_name.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Manifest name cannot be empty".to_string(),
            ));
        }
        if self.manifest_name.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(format!(
                "Manifest name must be a file name, not a path: {}",
                self.manifest_name
            )));
        }

        for dir in &self.vendor_dirs {
            if dir.is_empty() || dir.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid vendor directory name: '{}'",
                    dir
                )));
            }
        }

        Ok(())
    }

    /// Builds a manifest loader honouring `manifest_name` and `cache_enabled`
    pub fn package_loader(&self, fs: Arc<dyn FileSystem>) -> PackageLoader {
        let loader = PackageLoader::new(fs).with_manifest_name(self.manifest_name.clone());
        if self.cache_enabled {
            loader
        } else {
            loader.without_cache()
        }
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("vendor_dirs".to_string(), self.vendor_dirs.join(","));
        map.insert("manifest_name".to_string(), self.manifest_name.clone());
        map.insert("cache_enabled".to_string(), self.cache_enabled.to_string());
        map
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "JSXPRAGMA_VENDOR_DIRS",
        "JSXPRAGMA_MANIFEST_NAME",
        "JSXPRAGMA_CACHE_ENABLED",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn base_config() -> JsxPragmaConfig {
        JsxPragmaConfig {
            vendor_dirs: vec!["node_modules".to_string()],
            manifest_name: "package.json".to_string(),
            cache_enabled: true,
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = JsxPragmaConfig::default();

        assert_eq!(config, base_config());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var("JSXPRAGMA_VENDOR_DIRS", "vendor, bower_components,,");
        env::set_var("JSXPRAGMA_MANIFEST_NAME", "manifest.json");
        env::set_var("JSXPRAGMA_CACHE_ENABLED", "false");

        let config = JsxPragmaConfig::default();
        clear_env();

        assert_eq!(config.vendor_dirs, vec!["vendor", "bower_components"]);
        assert_eq!(config.manifest_name, "manifest.json");
        assert!(!config.cache_enabled);
    }

    #[test]
    #[serial]
    fn test_unparseable_cache_flag_uses_default() {
        clear_env();
        env::set_var("JSXPRAGMA_CACHE_ENABLED", "maybe");

        let config = JsxPragmaConfig::default();
        clear_env();

        assert!(config.cache_enabled);
    }

    #[test]
    fn test_validate_manifest_name() {
        let mut config = base_config();
        config.manifest_name = String::new();
        assert!(config.validate().is_err());

        config.manifest_name = "pkg/package.json".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must be a file name"));
    }

    #[test]
    fn test_validate_vendor_dirs() {
        let mut config = base_config();
        config.vendor_dirs = vec!["node_modules/.cache".to_string()];
        assert!(config.validate().is_err());

        config.vendor_dirs = vec![];
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_log_level_env_does_not_affect_validation() {
        clear_env();
        env::set_var("JSXPRAGMA_LOG_LEVEL", "verbose");

        let config = JsxPragmaConfig::default();
        env::remove_var("JSXPRAGMA_LOG_LEVEL");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_package_loader_honours_config() {
        let mut config = base_config();
        config.manifest_name = "manifest.json".to_string();
        config.cache_enabled = false;

        let loader = config.package_loader(Arc::new(MockFileSystem::new()));
        assert_eq!(loader.manifest_name(), "manifest.json");
        assert!(loader.cache().is_none());
    }

    #[test]
    fn test_display_map() {
        let map = base_config().to_display_map();
        assert_eq!(map.get("vendor_dirs").map(String::as_str), Some("node_modules"));
        assert_eq!(map.get("cache_enabled").map(String::as_str), Some("true"));
    }
}
