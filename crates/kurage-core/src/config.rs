use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::KurageError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub appearance: AppearanceConfig,
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Pre-filled server URL on the login form.
    pub default_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language code sent to the metadata provider; uppercased it doubles
    /// as the watch-provider region.
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub theme: String,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Host exposing the `/tmdb` proxy path. Empty falls back to the
    /// media-server URL.
    pub proxy_url: String,
}

/// Appearance mode. `System` resolves to dark or light at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl AppConfig {
    /// Load config: user file (if exists) over built-in defaults.
    pub fn load() -> Result<Self, KurageError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| KurageError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| KurageError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| KurageError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), KurageError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| KurageError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Base URL for the metadata proxy, falling back to the server URL
    /// when none is configured.
    pub fn metadata_base<'a>(&'a self, server_url: &'a str) -> &'a str {
        if self.metadata.proxy_url.is_empty() {
            server_url
        } else {
            &self.metadata.proxy_url
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// Platform directories for config and data files.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "kurage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.ui.language, "en");
        assert_eq!(config.appearance.mode, ThemeMode::System);
        assert!(config.server.default_url.is_empty());
    }

    #[test]
    fn roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.appearance.theme, config.appearance.theme);
        assert_eq!(deserialized.appearance.mode, config.appearance.mode);
    }

    #[test]
    fn metadata_base_falls_back_to_server() {
        let mut config = AppConfig::default();
        assert_eq!(config.metadata_base("http://jf.local"), "http://jf.local");
        config.metadata.proxy_url = "https://proxy.example".into();
        assert_eq!(config.metadata_base("http://jf.local"), "https://proxy.example");
    }
}
