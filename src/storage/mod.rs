// ABOUTME: Key/value storage abstraction with pluggable platform backings
// ABOUTME: Injected capability so the profile store carries no platform branching
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Storage abstraction layer
//!
//! The core persists two named slots (the draft document and the profile
//! identifier) through a process-wide key/value capability. The backing is
//! selected once at startup: a JSON-file store where the host grants a data
//! directory, an in-memory store otherwise. Consumers receive the capability
//! by injection and never branch on the platform themselves.

/// Backend selection with graceful in-memory fallback
pub mod factory;
/// Persistent JSON-file backing
pub mod file;
/// Volatile in-memory backing
pub mod memory;

use crate::errors::AppResult;

pub use factory::Storage;
pub use file::FileStorage;
pub use memory::InMemoryStorage;

/// Key/value storage capability
///
/// Values are opaque strings keyed by name. Individual operations are atomic
/// at single-key granularity; there is no cross-key transaction support and
/// none is needed by the core.
#[async_trait::async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> AppResult<()>;
}
