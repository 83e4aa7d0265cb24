//! # Client Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SALESFLOW_API_URL=https://erp.example.com/api                      │
//! │     SALESFLOW_SHOW_FAST_TRACK=false                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/salesflow/client.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "https://erp.example.com/api"
//! sales_path = "/sales"
//!
//! [ui]
//! show_fast_track = true
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Errors
// =============================================================================

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No config path available")]
    NoConfigPath,
}

// =============================================================================
// Sections
// =============================================================================

/// Backend location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the sales resource, appended to `base_url`.
    #[serde(default = "default_sales_path")]
    pub sales_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_sales_path() -> String {
    "/sales".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            sales_path: default_sales_path(),
        }
    }
}

/// What the sale screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_fast_track: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            show_fast_track: true,
        }
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl ClientConfig {
    /// Loads configuration.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, toml::to_string_pretty(self)?)?;

        info!(?path, "Client config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "must start with http:// or https://, got: {}",
                url
            )));
        }

        if !self.api.sales_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "api.sales_path".to_string(),
                value: self.api.sales_path.clone(),
            });
        }

        Ok(())
    }

    /// Applies `SALESFLOW_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(url) = lookup("SALESFLOW_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(path) = lookup("SALESFLOW_SALES_PATH") {
            self.api.sales_path = path;
        }

        if let Some(flag) = lookup("SALESFLOW_SHOW_FAST_TRACK") {
            self.ui.show_fast_track = match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "SALESFLOW_SHOW_FAST_TRACK".to_string(),
                        value: flag,
                    })
                }
            };
        }

        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "salesflow", "salesflow")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }

    /// URL of the sales collection.
    pub fn sales_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.sales_path
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.ui.show_fast_track);
        assert_eq!(config.sales_url(), "http://localhost:8000/api/sales");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.api.base_url = "ftp://erp".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        config.api.base_url = "https://erp.example.com/api/".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.sales_url(), "https://erp.example.com/api/sales");

        config.api.sales_path = "sales".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(env(&[
                ("SALESFLOW_API_URL", "https://erp.example.com"),
                ("SALESFLOW_SALES_PATH", "/v2/sales"),
                ("SALESFLOW_SHOW_FAST_TRACK", "off"),
            ]))
            .unwrap();

        assert_eq!(config.sales_url(), "https://erp.example.com/v2/sales");
        assert!(!config.ui.show_fast_track);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = ClientConfig::default();
        assert!(config
            .apply_overrides(env(&[("SALESFLOW_SHOW_FAST_TRACK", "maybe")]))
            .is_err());
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [ui]
            show_fast_track = false
            "#,
        )
        .unwrap();

        assert!(!config.ui.show_fast_track);
        assert_eq!(config.api, ApiSettings::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.ui.show_fast_track = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
