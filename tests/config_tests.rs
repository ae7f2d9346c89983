// SPDX-License-Identifier: PMPL-1.0-or-later

//! Config discovery and environment overrides

use multi_tools::config::{
    AppConfig, ConfigSource, PRIMARY_ENDPOINT_ENV, SECONDARY_ENDPOINT_ENV,
};
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn defaults_when_no_file_present() {
    let dir = TempDir::new().expect("tempdir should create");
    let (config, source) = AppConfig::load(None, dir.path()).expect("defaults should load");
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config.qr, AppConfig::default().qr);
    assert_eq!(config.video.analyze_delay_ms, 2500);
}

#[test]
fn discovers_yaml_in_working_directory() {
    let dir = TempDir::new().expect("tempdir should create");
    let path = dir.path().join("multi-tools.yaml");
    fs::write(&path, "output_dir: artifacts\nbarcode:\n  height: 60\n").expect("config should write");

    let (config, source) = AppConfig::load(None, dir.path()).expect("config should load");
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.output_dir, PathBuf::from("artifacts"));
    assert_eq!(config.barcode.height, 60);
    assert_eq!(config.barcode.module_width, 2);
}

#[test]
fn explicit_path_must_exist() {
    let dir = TempDir::new().expect("tempdir should create");
    let missing = dir.path().join("nope.yaml");
    assert!(AppConfig::load(Some(&missing), dir.path()).is_err());
}

#[test]
fn malformed_json_is_reported() {
    let dir = TempDir::new().expect("tempdir should create");
    let path = dir.path().join("multi-tools.json");
    fs::write(&path, "{ not json").expect("config should write");
    let err = AppConfig::load(None, dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("multi-tools.json"));
}

#[test]
fn environment_overrides_endpoints() {
    let mut config = AppConfig::default();
    env::set_var(PRIMARY_ENDPOINT_ENV, "");
    env::set_var(SECONDARY_ENDPOINT_ENV, "http://127.0.0.1:9/get");
    config.apply_env_overrides();
    env::remove_var(PRIMARY_ENDPOINT_ENV);
    env::remove_var(SECONDARY_ENDPOINT_ENV);

    assert_eq!(config.translator.primary_endpoint, "");
    assert_eq!(config.translator.secondary_endpoint, "http://127.0.0.1:9/get");
}
