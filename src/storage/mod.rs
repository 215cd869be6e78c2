//! Storage module for configuration.
//!
//! Selection state is never persisted; only user configuration lives on disk.

pub mod config;

pub use config::{
    get_config_path, load_config_from, save_config_to, AccessibilitySettings, AppConfig,
    ConfigError, NavigatorSettings, WindowSettings,
};
