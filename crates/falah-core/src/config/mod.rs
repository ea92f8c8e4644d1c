mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FalahError;
use crate::locale::Locale;
use defaults::*;

/// Top-level Falah configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Locale the site context starts in.
    #[serde(default)]
    pub default_locale: Locale,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_locale: Locale::default(),
            log_level: default_log_level(),
        }
    }
}

/// Where page content comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceKind {
    /// In-process store: compiled team data plus an optional content file.
    #[default]
    Static,
    /// The admin backend's HTTP API.
    Api,
}

/// Content source config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: ContentSourceKind,
    /// JSON file with projects, translations and team records (static source only).
    #[serde(default)]
    pub content_file: Option<String>,
}

/// Admin backend API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Reject combinations that cannot work at runtime.
    pub fn validate(&self) -> Result<(), FalahError> {
        if self.content.source == ContentSourceKind::Api && self.api.base_url.trim().is_empty() {
            return Err(FalahError::Config(
                "content.source = \"api\" requires a non-empty api.base_url".into(),
            ));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, FalahError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| FalahError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| FalahError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
