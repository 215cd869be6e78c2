//! Unit tests for configuration loading.

use accessnav::accessibility::AnnouncerKind;
use accessnav::navigator::NavigatorError;
use accessnav::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use tempfile::tempdir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.navigator.functions = vec!["Read Text".to_string(), "Read Labels".to_string()];
    config.accessibility.announcer = AnnouncerKind::Speech;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.navigator.functions, ["Read Text", "Read Labels"]);
    assert_eq!(loaded.accessibility.announcer, AnnouncerKind::Speech);
    assert_eq!(loaded.catalog().unwrap().len(), 2);
}

#[test]
fn test_empty_catalog_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator]\nfunctions = []\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidCatalog(NavigatorError::EmptyCatalog)
    ));
}

#[test]
fn test_duplicate_catalog_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator]\nfunctions = [\"A\", \"A\"]\n").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::InvalidCatalog(NavigatorError::DuplicateEntry { .. }))
    ));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator\nfunctions = 3").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}
