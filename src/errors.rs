// ABOUTME: Unified error handling for the profile sync and label analysis core
// ABOUTME: Defines standard error codes and constructor helpers shared by all modules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Centralized error types for the NutriScan core. Remote failures keep the
//! distinction between an HTTP-level rejection (`RemoteError`) and a
//! transport-level failure with no response at all (`NetworkError`) so that
//! calling screens can present them differently.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Remote API answered with a non-2xx status or an `ok:false` payload
    #[serde(rename = "REMOTE_ERROR")]
    RemoteError,
    /// Transport-level failure, no response was received
    #[serde(rename = "NETWORK_ERROR")]
    NetworkError,
    /// Local key/value storage operation failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Data serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Caller-provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RemoteError => "Remote service reported a failure",
            Self::NetworkError => "Could not reach the remote service",
            Self::StorageError => "Local storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InvalidInput => "The provided input is invalid",
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Remote API rejection: non-2xx status or explicit failure payload.
    ///
    /// The message carries the server-provided error text when present,
    /// otherwise the `HTTP <status>` form, so callers can display it as-is.
    pub fn remote(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::RemoteError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Transport failure, no response received at all
    pub fn network(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NetworkError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Local storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
