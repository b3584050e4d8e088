// ABOUTME: Configuration module exposing environment-based settings for the core
// ABOUTME: Groups remote API endpoints, storage backing, and logging configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management for the NutriScan core

/// Environment-based configuration loading
pub mod environment;

pub use environment::{
    CoreConfig, LabelApiConfig, ProfileApiConfig, StorageBackend, StorageConfig,
};
