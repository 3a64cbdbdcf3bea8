use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tempdir::TempDir;

use crate::config::Config;
use crate::config::RouteLayout;
use crate::constants::CONFIG_DEFAULT;
use crate::test_utils::EMPTY_FS;
use crate::test_utils::REAL_FS;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("fibload.toml");
    fs::write(&path, contents).expect("The test file could not be written.");
    path
}

/// This test will fail if the semantics of the config struct are changed.
/// If this is the case, update the README and make sure that the rest of
/// the application reflects these changes.
#[test]
fn breaking_changes_config_struct() {
    #[allow(clippy::unnecessary_operation)]
    Config {
        address: "127.0.0.1:8000".parse().unwrap(),
        layout: RouteLayout::Split,
        profiling: true,
        compute_timeout: None,
    };
}

#[test]
fn breaking_changes_config_file_all_values() {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let path = write_config(
        &dir,
        r#"
        address = "127.0.0.1:9123"
        layout = "single"
        profiling = false
        compute_timeout = "1m 30s"
        "#,
    );

    assert_eq!(
        Config {
            address: "127.0.0.1:9123".parse::<SocketAddr>().unwrap(),
            layout: RouteLayout::Single,
            profiling: false,
            compute_timeout: Some(Duration::from_secs(90)),
        },
        Config::from_file(&path, &REAL_FS).unwrap()
    );
}

#[test]
fn empty_file_is_default_test() {
    let dir = TempDir::new("config_folder").unwrap();
    let path = write_config(&dir, "");

    let config = Config::from_file(&path, &REAL_FS).unwrap();

    assert_eq!(Config::default(), config);
    assert_eq!("0.0.0.0:8000".parse::<SocketAddr>().unwrap(), config.address);
    assert_eq!(RouteLayout::Split, config.layout);
    assert!(config.profiling);
    assert_eq!(None, config.compute_timeout);
}

#[test]
fn unknown_field_is_rejected_test() {
    let dir = TempDir::new("config_folder").unwrap();
    let path = write_config(&dir, "max_n = 40\n");

    assert!(Config::from_file(&path, &REAL_FS).is_err());
}

#[test]
fn invalid_timeout_is_rejected_test() {
    let dir = TempDir::new("config_folder").unwrap();
    let path = write_config(&dir, "compute_timeout = \"soon\"\n");

    assert!(Config::from_file(&path, &REAL_FS).is_err());
}

#[test]
fn invalid_layout_is_rejected_test() {
    let dir = TempDir::new("config_folder").unwrap();
    let path = write_config(&dir, "layout = \"triple\"\n");

    assert!(Config::from_file(&path, &REAL_FS).is_err());
}

#[test]
fn missing_default_file_test() {
    let config = Config::load(&CONFIG_DEFAULT(), false, &EMPTY_FS).unwrap();

    assert_eq!(Config::default(), config);
}

#[test]
fn missing_explicit_file_test() {
    assert!(Config::load(&CONFIG_DEFAULT(), true, &EMPTY_FS).is_err());
}

#[test]
fn config_round_trips_through_toml_test() {
    let config = Config {
        address: "[::1]:8080".parse().unwrap(),
        layout: RouteLayout::Single,
        profiling: true,
        compute_timeout: Some(Duration::from_millis(1500)),
    };

    let serialized = toml::to_string(&config).unwrap();

    assert!(serialized.contains("compute_timeout = \"1s 500ms\""));
    assert_eq!(config, toml::from_str::<Config>(&serialized).unwrap());
}

#[test]
fn layout_from_str_test() {
    assert_eq!(RouteLayout::Split, "split".parse().unwrap());
    assert_eq!(RouteLayout::Single, "single".parse().unwrap());
    assert!("Split".parse::<RouteLayout>().is_err());
    assert_eq!("single", RouteLayout::Single.to_string());
}
