// ABOUTME: Application constants shared across the profile and analysis modules
// ABOUTME: Groups persisted storage key names and the UI label-to-code tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Application constants

/// Label-to-code lookup tables for form selections
pub mod code_tables;

/// Names of the persisted key/value slots
pub mod keys {
    /// JSON-encoded draft profile document
    pub const PROFILE_DRAFT: &str = "profile_draft";
    /// Server-issued profile identifier (raw string)
    pub const PROFILE_ID: &str = "profile_id";
}
