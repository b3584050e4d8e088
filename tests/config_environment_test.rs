// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Covers defaults, overrides, and unparseable numeric variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan_core::config::environment::{
    CoreConfig, DEFAULT_LABEL_API_BASE, DEFAULT_PROFILE_API_BASE,
};
use nutriscan_core::config::StorageBackend;
use serial_test::serial;
use std::env;

const CONFIG_VARS: &[&str] = &[
    "PROFILE_API_BASE",
    "LABEL_API_BASE",
    "HTTP_TIMEOUT_SECS",
    "HTTP_CONNECT_TIMEOUT_SECS",
    "STORAGE_BACKEND",
    "STORAGE_PATH",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_config_env();

    let config = CoreConfig::from_env().unwrap();
    assert_eq!(config.profile_api.base_url, DEFAULT_PROFILE_API_BASE);
    assert_eq!(config.label_api.base_url, DEFAULT_LABEL_API_BASE);
    assert_eq!(config.profile_api.timeout_secs, 30);
    assert_eq!(config.profile_api.connect_timeout_secs, 10);
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.path, None);
}

#[test]
#[serial]
fn test_base_addresses_come_from_the_environment() {
    clear_config_env();
    env::set_var("PROFILE_API_BASE", "https://profile.nutriscan.example");
    env::set_var("LABEL_API_BASE", "https://label.nutriscan.example");

    let config = CoreConfig::from_env().unwrap();
    assert_eq!(
        config.profile_api.base_url,
        "https://profile.nutriscan.example"
    );
    assert_eq!(config.label_api.base_url, "https://label.nutriscan.example");

    clear_config_env();
}

#[test]
#[serial]
fn test_storage_backend_and_path_overrides() {
    clear_config_env();
    env::set_var("STORAGE_BACKEND", "memory");
    env::set_var("STORAGE_PATH", "/tmp/nutriscan-test");

    let config = CoreConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(
        config.storage.path.as_deref(),
        Some(std::path::Path::new("/tmp/nutriscan-test"))
    );

    clear_config_env();
}

#[test]
#[serial]
fn test_timeout_override_applies_to_both_clients() {
    clear_config_env();
    env::set_var("HTTP_TIMEOUT_SECS", "5");

    let config = CoreConfig::from_env().unwrap();
    assert_eq!(config.profile_api.timeout_secs, 5);
    assert_eq!(config.label_api.timeout_secs, 5);

    clear_config_env();
}

#[test]
#[serial]
fn test_unparseable_timeout_is_an_error() {
    clear_config_env();
    env::set_var("HTTP_TIMEOUT_SECS", "soon");

    let result = CoreConfig::from_env();
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_TIMEOUT_SECS"));

    clear_config_env();
}

#[test]
#[serial]
fn test_unknown_storage_backend_falls_back_to_file() {
    clear_config_env();
    env::set_var("STORAGE_BACKEND", "sqlite");

    let config = CoreConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::File);

    clear_config_env();
}
