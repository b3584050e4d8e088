// ABOUTME: Integration tests for the key/value storage backings and factory
// ABOUTME: Covers file persistence, corrupt-store recovery, and memory fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use nutriscan_core::config::{StorageBackend, StorageConfig};
use nutriscan_core::storage::{FileStorage, InMemoryStorage, Storage, StorageProvider};
use tempfile::TempDir;

#[tokio::test]
async fn test_file_storage_round_trip() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();

    assert_eq!(storage.get("profile_id").await.unwrap(), None);

    storage.set("profile_id", "srv-1").await.unwrap();
    assert_eq!(
        storage.get("profile_id").await.unwrap().as_deref(),
        Some("srv-1")
    );

    storage.remove("profile_id").await.unwrap();
    assert_eq!(storage.get("profile_id").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_storage_survives_reopen() {
    init_test_logging();
    let dir = TempDir::new().unwrap();

    {
        let storage = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();
        storage.set("profile_draft", r#"{"basic":{}}"#).await.unwrap();
    }

    let reopened = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(
        reopened.get("profile_draft").await.unwrap().as_deref(),
        Some(r#"{"basic":{}}"#)
    );
}

#[tokio::test]
async fn test_file_storage_keys_are_independent() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();

    storage.set("profile_draft", "{}").await.unwrap();
    storage.set("profile_id", "srv-2").await.unwrap();
    storage.remove("profile_draft").await.unwrap();

    assert_eq!(storage.get("profile_draft").await.unwrap(), None);
    assert_eq!(
        storage.get("profile_id").await.unwrap().as_deref(),
        Some("srv-2")
    );
}

#[tokio::test]
async fn test_corrupt_store_file_recovers_as_empty() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();
    storage.set("profile_id", "srv-3").await.unwrap();

    std::fs::write(storage.path(), "][ not json").unwrap();

    assert_eq!(storage.get("profile_id").await.unwrap(), None);
    // The store stays writable after recovery
    storage.set("profile_id", "srv-4").await.unwrap();
    assert_eq!(
        storage.get("profile_id").await.unwrap().as_deref(),
        Some("srv-4")
    );
}

#[tokio::test]
async fn test_factory_selects_the_configured_file_backing() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = Storage::from_config(&StorageConfig {
        backend: StorageBackend::File,
        path: Some(dir.path().to_path_buf()),
    });

    assert_eq!(storage.backend_info(), "file (persistent)");
    storage.set("profile_id", "srv-5").await.unwrap();
    assert_eq!(
        storage.get("profile_id").await.unwrap().as_deref(),
        Some("srv-5")
    );
}

#[tokio::test]
async fn test_factory_falls_back_to_memory_when_file_backing_fails() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    // A regular file where the directory should be makes initialization fail
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();

    let storage = Storage::from_config(&StorageConfig {
        backend: StorageBackend::File,
        path: Some(blocker),
    });

    assert_eq!(storage.backend_info(), "memory (volatile)");
    // The fallback still serves the draft flow for the session
    storage.set("profile_draft", "{}").await.unwrap();
    assert_eq!(
        storage.get("profile_draft").await.unwrap().as_deref(),
        Some("{}")
    );
}

#[tokio::test]
async fn test_memory_clones_share_one_backing_map() {
    let storage = InMemoryStorage::new();
    let other_handle = storage.clone();

    storage.set("profile_id", "srv-6").await.unwrap();
    assert_eq!(
        other_handle.get("profile_id").await.unwrap().as_deref(),
        Some("srv-6")
    );
}
