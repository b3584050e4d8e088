// ABOUTME: Storage backend selection with graceful in-memory fallback
// ABOUTME: Enum dispatch over the file and memory backings, chosen at startup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Storage factory
//!
//! Selects the concrete key/value backing once at process start. When the
//! configured file backing cannot be initialized (no resolvable data
//! directory, unwritable path), the factory logs a warning and hands out the
//! in-memory backing instead of failing startup: the draft flow keeps
//! working for the session, it just loses persistence.

use super::{FileStorage, InMemoryStorage, StorageProvider};
use crate::config::environment::{StorageBackend, StorageConfig};
use crate::errors::AppResult;
use tracing::{info, warn};

/// Storage instance wrapper that delegates to the selected backing
#[derive(Clone)]
pub enum Storage {
    /// Persistent JSON-file backing
    File(FileStorage),
    /// Volatile in-memory backing
    Memory(InMemoryStorage),
}

impl Storage {
    /// Select and initialize the backing described by `config`
    ///
    /// A file backing that fails to initialize falls back to memory; this
    /// constructor therefore never fails.
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage backing");
                Self::Memory(InMemoryStorage::new())
            }
            StorageBackend::File => match FileStorage::new(config.path.clone()) {
                Ok(file) => {
                    info!(path = %file.path().display(), "Using file storage backing");
                    Self::File(file)
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        "File storage unavailable, falling back to in-memory backing"
                    );
                    Self::Memory(InMemoryStorage::new())
                }
            },
        }
    }

    /// Descriptive name of the active backing
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::File(_) => "file (persistent)",
            Self::Memory(_) => "memory (volatile)",
        }
    }
}

#[async_trait::async_trait]
impl StorageProvider for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::File(storage) => storage.get(key).await,
            Self::Memory(storage) => storage.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::File(storage) => storage.set(key, value).await,
            Self::Memory(storage) => storage.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::File(storage) => storage.remove(key).await,
            Self::Memory(storage) => storage.remove(key).await,
        }
    }
}
