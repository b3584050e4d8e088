// ABOUTME: Main library entry point for the NutriScan health-profile core
// ABOUTME: Provides the draft store, derived metrics, code tables, and API clients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # NutriScan Core
//!
//! The health-profile state & sync layer of the NutriScan food-label
//! scanning app. The mobile screens, camera wrappers, and remote backends
//! live elsewhere; this crate owns the data model and protocol work between
//! them:
//!
//! - **Profile draft store**: merges per-form-page partial updates into one
//!   persisted draft document and syncs it with the remote profile API,
//!   tracking the server-issued profile identifier.
//! - **Code tables**: normalize the localized labels the form screens show
//!   into the stable machine codes everything downstream works on.
//! - **Derived metrics**: BMI, BMI category, BMR, and TDEE, recomputed from
//!   the current draft on every read.
//! - **Label analysis client**: ships a captured label image to the
//!   analysis backend as multipart or base64 and passes the result through.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriscan_core::config::environment::CoreConfig;
//! use nutriscan_core::external::ProfileApiClient;
//! use nutriscan_core::profile::ProfileStore;
//! use nutriscan_core::storage::Storage;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CoreConfig::from_env()?;
//! let storage = Storage::from_config(&config.storage);
//! let api = ProfileApiClient::new(config.profile_api)?;
//!
//! let store = ProfileStore::new(storage, api);
//! let draft = store.load_draft().await?;
//! let metrics = nutriscan_core::intelligence::compute_derived(&draft);
//! # Ok(())
//! # }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants: storage keys and label-to-code tables
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// External API clients (profile backend, label analysis backend)
pub mod external;

/// Derived health metrics computed from the profile document
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models for the health profile
pub mod models;

/// Profile draft store with local persistence and remote sync
pub mod profile;

/// Key/value storage abstraction with pluggable backings
pub mod storage;
