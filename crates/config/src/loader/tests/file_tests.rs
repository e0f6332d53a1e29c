//! File and user-path loading tests.
//!
//! Responsibilities:
//! - Test `Config::load_from_file`, including `~/` expansion.
//! - Test `Config::load_user_config` together with `ensure_user_config_exists`.

use std::path::PathBuf;

use serial_test::serial;

use crate::constants::DEFAULT_CONFIG;
use crate::loader::error::ConfigError;
use crate::persistence::{ensure_user_config_exists, user_config_path};
use crate::types::Config;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "host: file.example\nzone: sh1a\n").unwrap();

    let mut config = Config::new_default().unwrap();
    config.load_from_file(&path).unwrap();

    assert_eq!(config.host, "file.example");
    assert_eq!(config.zone, "sh1a");
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let mut config = Config::new_default().unwrap();
    let result = config.load_from_file(&path);

    assert!(matches!(
        result,
        Err(ConfigError::FileRead { path: ref p, .. }) if *p == path
    ));
    assert_eq!(config.host, "api.qingcloud.com");
}

#[test]
fn test_load_from_file_with_malformed_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "port: eighty\n").unwrap();

    let mut config = Config::new_default().unwrap();
    assert!(matches!(
        config.load_from_file(&path),
        Err(ConfigError::Decode(_))
    ));
}

#[test]
#[serial]
fn test_load_from_file_expands_home() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("qy.yaml"), "host: home.example\n").unwrap();

    temp_env::with_var("HOME", Some(home.path()), || {
        let mut config = Config::new_default().unwrap();
        config.load_from_file("~/qy.yaml").unwrap();
        assert_eq!(config.host, "home.example");
    });
}

#[test]
#[serial]
fn test_load_from_file_reports_expanded_path() {
    let home = tempfile::tempdir().unwrap();

    temp_env::with_var("HOME", Some(home.path()), || {
        let mut config = Config::new_default().unwrap();
        let result = config.load_from_file("~/absent.yaml");

        match result {
            Err(ConfigError::FileRead { path, .. }) => {
                assert_eq!(path, home.path().join("absent.yaml"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_load_user_config_is_a_pure_read() {
    let home = tempfile::tempdir().unwrap();

    temp_env::with_var("HOME", Some(home.path()), || {
        let mut config = Config::new_default().unwrap();
        let result = config.load_user_config();

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
        assert!(!user_config_path().unwrap().exists());
    });
}

#[test]
#[serial]
fn test_fresh_home_installs_then_loads_user_config() {
    let home = tempfile::tempdir().unwrap();

    temp_env::with_var("HOME", Some(home.path()), || {
        assert!(ensure_user_config_exists().unwrap());

        let expected: PathBuf = home.path().join(".qingcloud").join("config.yaml");
        assert_eq!(std::fs::read_to_string(&expected).unwrap(), DEFAULT_CONFIG);

        let mut config = Config::new("AKID", "SECRET").unwrap();
        config.load_user_config().unwrap();
        assert_eq!(config.host, "api.qingcloud.com");

        assert!(!ensure_user_config_exists().unwrap());
    });
}

#[test]
#[serial]
fn test_user_config_overrides_defaults() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".qingcloud");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "zone: ap2a\nlog_level: info\n").unwrap();

    temp_env::with_var("HOME", Some(home.path()), || {
        let mut config = Config::new_default().unwrap();
        config.load_user_config().unwrap();

        assert_eq!(config.zone, "ap2a");
        assert_eq!(config.log_level.as_str(), "info");
    });
}
