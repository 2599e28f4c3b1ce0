//! Configuration system for yamldig.
//!
//! Persistent defaults for the command-line flags, loaded from a TOML file
//! and overridden by whatever is passed on the command line. Missing or
//! unreadable config falls back to defaults silently; a query tool should
//! never refuse to run because of a stale rc file.
//!
//! The canonical dump's 3-space indentation is a fixed design constant and
//! deliberately not configurable.
//!
//! # Example
//!
//! ```
//! use yamldig::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.format, "yaml");
//! assert!(!config.trim);
//! ```

use serde::{Deserialize, Serialize};

/// Persistent defaults for the yamldig CLI.
///
/// # Fields
///
/// * `format` - Default output flavor, `"yaml"` or `"json"` (default: "yaml")
/// * `trim` - Trim surrounding whitespace from results (default: false)
/// * `silent` - Suppress diagnostic context on path errors (default: false)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output flavor: "yaml" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Trim surrounding whitespace from results
    #[serde(default)]
    pub trim: bool,

    /// Suppress diagnostic context on path errors
    #[serde(default)]
    pub silent: bool,
}

/// Returns the default output flavor.
fn default_format() -> String {
    "yaml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: default_format(),
            trim: false,
            silent: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamldig/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamldig");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read or parsed.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }
}
