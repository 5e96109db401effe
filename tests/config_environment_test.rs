// ABOUTME: Integration tests for client configuration loading
// ABOUTME: Platform base URLs, overrides, timeouts, and validation through the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use fitcoach_client::config::{ClientConfig, Environment, Platform};
use fitcoach_client::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 7] = [
    "FITCOACH_PLATFORM",
    "FITCOACH_DEVICE_HOST",
    "FITCOACH_API_BASE_URL",
    "FITCOACH_DATA_DIR",
    "FITCOACH_HTTP_TIMEOUT_SECS",
    "FITCOACH_HEALTH_TIMEOUT_SECS",
    "ENVIRONMENT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_platform_defaults() {
    let android = ClientConfig::from_lookup(lookup(&[
        ("FITCOACH_PLATFORM", "android"),
        ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
    ]))
    .unwrap();
    assert_eq!(android.platform, Platform::Android);
    assert_eq!(android.base_url, "http://10.0.2.2:8000");

    let ios = ClientConfig::from_lookup(lookup(&[
        ("FITCOACH_PLATFORM", "ios"),
        ("FITCOACH_DEVICE_HOST", "192.168.1.20"),
        ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
    ]))
    .unwrap();
    assert_eq!(ios.base_url, "http://192.168.1.20:8000");

    let desktop = ClientConfig::from_lookup(lookup(&[("FITCOACH_DATA_DIR", "/tmp/fitcoach")])).unwrap();
    assert_eq!(desktop.base_url, "http://10.0.0.171:8000");
    assert_eq!(desktop.http_timeout, Some(Duration::from_secs(30)));
    assert_eq!(desktop.health_timeout, Duration::from_secs(10));
}

#[test]
fn test_zero_http_timeout_disables_it() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("FITCOACH_HTTP_TIMEOUT_SECS", "0"),
        ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
    ]))
    .unwrap();
    assert_eq!(config.http_timeout, None);
}

#[test]
fn test_invalid_values_are_config_errors() {
    let bad_number = ClientConfig::from_lookup(lookup(&[
        ("FITCOACH_HTTP_TIMEOUT_SECS", "soon"),
        ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
    ]))
    .unwrap_err();
    assert_eq!(bad_number.code, ErrorCode::ConfigInvalid);

    let bad_scheme = ClientConfig::from_lookup(lookup(&[
        ("FITCOACH_API_BASE_URL", "ftp://backend"),
        ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
    ]))
    .unwrap_err();
    assert_eq!(bad_scheme.code, ErrorCode::ConfigInvalid);

    let config = ClientConfig::from_lookup(lookup(&[("FITCOACH_DATA_DIR", "/tmp/fitcoach")])).unwrap();
    assert!(config.with_base_url("not a url").is_err());
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    clear_vars();
    env::set_var("FITCOACH_API_BASE_URL", "https://coach.example.com/");
    env::set_var("FITCOACH_DATA_DIR", "/tmp/fitcoach-env");
    env::set_var("ENVIRONMENT", "production");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://coach.example.com");
    assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/fitcoach-env"));
    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());

    clear_vars();
}

#[test]
#[serial]
fn test_overrides_apply_after_loading() {
    clear_vars();
    env::set_var("FITCOACH_DATA_DIR", "/tmp/fitcoach-env");

    let config = ClientConfig::from_env()
        .unwrap()
        .with_base_url("http://localhost:9000/")
        .unwrap()
        .with_data_dir("/tmp/elsewhere");
    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/elsewhere"));
    assert!(config.summary().contains("http://localhost:9000"));

    clear_vars();
}
