// ABOUTME: Profile draft lifecycle owned by the draft store
// ABOUTME: Local persistence, deep-merge updates, and remote synchronization
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Profile draft management

/// Draft store with local persistence and remote sync
pub mod store;

pub use store::ProfileStore;
