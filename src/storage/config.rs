//! Application configuration.
//!
//! Loaded from `config.toml` in the platform config directory, or from the
//! path in `ACCESSNAV_CONFIG`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::accessibility::AnnouncerKind;
use crate::navigator::{FunctionCatalog, NavigatorError, DEFAULT_FUNCTIONS};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ACCESSNAV_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Selectable functions
    pub navigator: NavigatorSettings,
    /// Announcement settings
    pub accessibility: AccessibilitySettings,
    /// Window settings
    pub window: WindowSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            navigator: NavigatorSettings::default(),
            accessibility: AccessibilitySettings::default(),
            window: WindowSettings::default(),
        }
    }
}

impl AppConfig {
    /// Build the validated function catalog.
    pub fn catalog(&self) -> Result<FunctionCatalog, ConfigError> {
        Ok(FunctionCatalog::new(&self.navigator.functions)?)
    }
}

/// Function catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Ordered display names, at least one
    pub functions: Vec<String>,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Announcement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    /// Where drained announcements go
    pub announcer: AnnouncerKind,
    /// Speech rate multiplier (0.5 - 2.0)
    pub speech_rate: f32,
    /// Speech volume (0.0 - 1.0)
    pub speech_volume: f32,
    /// Enable arrow-key navigation
    pub keyboard_navigation: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            announcer: AnnouncerKind::LiveRegion,
            speech_rate: 1.0,
            speech_volume: 1.0,
            keyboard_navigation: true,
        }
    }
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "AccessNav".to_string(),
            width: 480.0,
            height: 800.0,
        }
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "accessnav", "AccessNav")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| get_config_dir().join("config.toml"))
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    // Reject bad catalogs at load time rather than when the screen opens.
    config.catalog()?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid function catalog: {0}")]
    InvalidCatalog(#[from] NavigatorError),
}
