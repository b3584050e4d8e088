// ABOUTME: Persistent key/value backing stored as one JSON object file
// ABOUTME: Whole-file read-modify-write per operation behind an async lock
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StorageProvider;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// File name of the key/value store inside the data directory
const STORE_FILE_NAME: &str = "kv.json";

/// Directory created under the platform data dir when no override is given
const APP_DIR_NAME: &str = "nutriscan";

/// Persistent key/value storage backed by a single JSON object file
///
/// The store holds two small slots, so whole-file rewrites per operation are
/// cheap and keep each key update atomic from the reader's point of view.
/// The internal lock serializes operations; a torn write can therefore only
/// come from outside the process.
#[derive(Clone)]
pub struct FileStorage {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStorage {
    /// Create a file store rooted at `dir`, or at the platform data
    /// directory when `dir` is `None`
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be resolved or created
    pub fn new(dir: Option<PathBuf>) -> AppResult<Self> {
        let dir = match dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| AppError::storage("no platform data directory available"))?
                .join(APP_DIR_NAME),
        };

        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::storage(format!("cannot create storage directory {}", dir.display()))
                .with_source(e)
        })?;

        Ok(Self {
            path: dir.join(STORE_FILE_NAME),
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the whole store into a map
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// recovered as empty with a warning: the slots only hold re-creatable
    /// draft state, and refusing to start over a corrupt cache would strand
    /// the whole profile flow.
    async fn read_map(&self) -> AppResult<Map<String, Value>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "cannot read storage file {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(
                    path = %self.path.display(),
                    "storage file is not a JSON object, starting over with an empty store"
                );
                Ok(Map::new())
            }
        }
    }

    /// Write the whole store back to disk
    async fn write_map(&self, map: &Map<String, Value>) -> AppResult<()> {
        let serialized = serde_json::to_string(map)
            .map_err(|e| AppError::serialization("cannot encode storage file").with_source(e))?;

        tokio::fs::write(&self.path, serialized).await.map_err(|e| {
            AppError::storage(format!(
                "cannot write storage file {}",
                self.path.display()
            ))
            .with_source(e)
        })
    }
}

#[async_trait::async_trait]
impl StorageProvider for FileStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let map = self.read_map().await?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
