//! Configuration loading and override tests
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial] so they do
//! not race each other.

use ecoscan_common::config::{ConfigOverrides, ConfigSource, TomlConfig};
use ecoscan_common::Error;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = TomlConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8000);
    assert!(config.database_path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.external.enabled);
    assert_eq!(config.external.base_url, "https://world.openfoodfacts.org");
    assert_eq!(config.external.timeout(), Duration::from_millis(5000));
    assert_eq!(config.external.max_results, 3);
    assert_eq!(config.bind_address(), "127.0.0.1:8000");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = TomlConfig::from_toml_str(
        r#"
        port = 9000

        [external]
        timeout_ms = 1500
        "#,
    )
    .unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.external.timeout_ms, 1500);
    assert_eq!(config.external.max_results, 3);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_toml() {
    let config = TomlConfig::from_toml_str(
        r#"
        host = "0.0.0.0"
        port = 8080
        database_path = "/var/lib/ecoscan/scans.db"

        [logging]
        level = "debug"

        [external]
        enabled = false
        base_url = "http://localhost:9999"
        timeout_ms = 250
        max_results = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.database_path, Some(PathBuf::from("/var/lib/ecoscan/scans.db")));
    assert_eq!(config.logging.level, "debug");
    assert!(!config.external.enabled);
    assert_eq!(config.external.base_url, "http://localhost:9999");
    assert_eq!(config.external.max_results, 5);
}

#[test]
fn test_invalid_values_rejected() {
    for toml in [
        "port = 0",
        "[external]\ntimeout_ms = 0",
        "[external]\nmax_results = 0",
        "host = \"  \"",
    ] {
        let result = TomlConfig::from_toml_str(toml);
        assert!(matches!(result, Err(Error::Config(_))), "accepted: {}", toml);
    }
}

#[test]
fn test_unknown_key_rejected() {
    let result = TomlConfig::from_toml_str("prot = 8000");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let result = TomlConfig::load(Some(&missing));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_file_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "port = 8123\n");

    let (config, source) = TomlConfig::load(Some(&path)).unwrap();
    assert_eq!(config.port, 8123);
    assert_eq!(source, ConfigSource::File(path));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_discovery_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let (config, source) = TomlConfig::load(None).unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config.port, 8000);

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_discovery_finds_platform_file() {
    let dir = tempfile::tempdir().unwrap();
    let ecoscan_dir = dir.path().join("ecoscan");
    std::fs::create_dir_all(&ecoscan_dir).unwrap();
    std::fs::write(ecoscan_dir.join("config.toml"), "port = 8456\n").unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let (config, source) = TomlConfig::load(None).unwrap();
    assert_eq!(config.port, 8456);
    assert_eq!(source, ConfigSource::File(ecoscan_dir.join("config.toml")));

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
fn test_overrides_win() {
    let config = TomlConfig::from_toml_str("port = 9000\n").unwrap();
    let merged = config
        .with_overrides(ConfigOverrides {
            host: Some("0.0.0.0".to_string()),
            port: Some(9100),
            database_path: Some(PathBuf::from("scans.db")),
            log_level: Some("warn".to_string()),
            offline: true,
        })
        .unwrap();

    assert_eq!(merged.bind_address(), "0.0.0.0:9100");
    assert_eq!(merged.database_path, Some(PathBuf::from("scans.db")));
    assert_eq!(merged.logging.level, "warn");
    assert!(!merged.external.enabled);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = TomlConfig::from_toml_str("port = 9000\n").unwrap();
    let merged = config.with_overrides(ConfigOverrides::default()).unwrap();
    assert_eq!(merged.port, 9000);
    assert!(merged.external.enabled);
}

#[test]
fn test_config_source_display() {
    assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
    assert_eq!(
        ConfigSource::File(PathBuf::from("/etc/ecoscan.toml")).to_string(),
        "/etc/ecoscan.toml"
    );
}
