// ABOUTME: Environment-based configuration for remote endpoints and local storage
// ABOUTME: Reads API base addresses, HTTP timeouts, and storage backing selection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-only configuration
//!
//! The two remote base addresses are the only externally configurable
//! parameters of the core; everything else has sensible defaults. A
//! browser-hosted client and a native device client point at different
//! deployments of the same backends, so the addresses come from the host
//! environment rather than hard constants.

use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default base address for the profile API
pub const DEFAULT_PROFILE_API_BASE: &str = "http://localhost:8686";

/// Default base address for the label analysis API
pub const DEFAULT_LABEL_API_BASE: &str = "http://localhost:8787";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Remote profile API endpoint configuration
#[derive(Debug, Clone)]
pub struct ProfileApiConfig {
    /// Base URL for the profile save/fetch endpoints
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ProfileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROFILE_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Remote label analysis API endpoint configuration
#[derive(Debug, Clone)]
pub struct LabelApiConfig {
    /// Base URL for the label analysis endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for LabelApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LABEL_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Storage backing selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Persistent JSON-file backing under the platform data directory
    File,
    /// Volatile in-memory backing (also the fallback when file backing fails)
    Memory,
}

impl StorageBackend {
    /// Parse a backend name, defaulting to `File` for unknown values
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "memory" => Self::Memory,
            _ => Self::File,
        }
    }
}

/// Local key/value storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Which backing store to use
    pub backend: StorageBackend,
    /// Override for the file backing directory (default: platform data dir)
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: None,
        }
    }
}

/// Complete configuration for the NutriScan core
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Remote profile API settings
    pub profile_api: ProfileApiConfig,
    /// Remote label analysis API settings
    pub label_api: LabelApiConfig,
    /// Local storage settings
    pub storage: StorageConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but unparseable
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            profile_api: ProfileApiConfig {
                base_url: env_var_or("PROFILE_API_BASE", DEFAULT_PROFILE_API_BASE)?,
                timeout_secs: parse_env_var_or("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_env_var_or(
                    "HTTP_CONNECT_TIMEOUT_SECS",
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            label_api: LabelApiConfig {
                base_url: env_var_or("LABEL_API_BASE", DEFAULT_LABEL_API_BASE)?,
                timeout_secs: parse_env_var_or("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_env_var_or(
                    "HTTP_CONNECT_TIMEOUT_SECS",
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            storage: StorageConfig {
                backend: StorageBackend::from_str_or_default(&env_var_or(
                    "STORAGE_BACKEND",
                    "file",
                )?),
                path: env::var("STORAGE_PATH").ok().map(PathBuf::from),
            },
            logging: LoggingConfig::from_env(),
        };

        Ok(config)
    }
}

/// Get environment variable with default fallback
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_string()))
}

/// Get a numeric environment variable with default fallback
fn parse_env_var_or(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number, got {value:?}")),
        Err(_) => Ok(default),
    }
}
