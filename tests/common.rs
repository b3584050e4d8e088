// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, store builders, and a stub HTTP backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]

//! Shared test utilities for `nutriscan_core`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use nutriscan_core::external::MockProfileApi;
use nutriscan_core::models::ProfileDocument;
use nutriscan_core::profile::ProfileStore;
use nutriscan_core::storage::InMemoryStorage;
use serde_json::Value;
use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a profile document from a JSON literal
pub fn doc(value: Value) -> ProfileDocument {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fixture must be a JSON object"),
    }
}

/// Profile store over in-memory storage and an accepting mock API
pub fn memory_store() -> ProfileStore<InMemoryStorage, MockProfileApi> {
    init_test_logging();
    ProfileStore::new(InMemoryStorage::new(), MockProfileApi::new())
}

/// Profile store over in-memory storage and the given mock API
pub fn store_with_api(api: MockProfileApi) -> ProfileStore<InMemoryStorage, MockProfileApi> {
    init_test_logging();
    ProfileStore::new(InMemoryStorage::new(), api)
}

/// Profile store sharing the given in-memory storage handle
///
/// `InMemoryStorage` clones share one backing map, so tests can seed or
/// inspect the raw slots through their own handle.
pub fn store_with_storage(
    storage: InMemoryStorage,
) -> ProfileStore<InMemoryStorage, MockProfileApi> {
    init_test_logging();
    ProfileStore::new(storage, MockProfileApi::new())
}

/// One HTTP request as seen by the stub backend
pub struct CapturedRequest {
    /// Request line plus headers, up to the blank line
    pub head: String,
    /// Raw request body bytes
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Case-insensitive check over the request line and headers
    pub fn head_contains(&self, needle: &str) -> bool {
        self.head.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Body interpreted as UTF-8 (multipart payloads are ASCII-framed)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Spawn a one-shot stub HTTP backend answering with the canned response
///
/// Binds to an ephemeral local port, serves exactly one request, and hands
/// the captured request back through the returned channel. Returns the base
/// URL to point a client at.
pub async fn spawn_stub_server(
    status: u16,
    response_body: &str,
) -> (String, tokio::sync::oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response_body = response_body.to_string();
    let (tx, rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buffer = Vec::new();
        let mut chunk = [0_u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break buffer.len();
            }
            buffer.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_header_end(&buffer) {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = (header_end + 4).min(buffer.len());
        while buffer.len() < header_end + 4 + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }
        let body = buffer[body_start..].to_vec();

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len(),
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(CapturedRequest { head, body });
    });

    (format!("http://{addr}"), rx)
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

/// A local port with nothing listening on it, for connection-refused tests
pub fn unused_local_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
