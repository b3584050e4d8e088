// ABOUTME: Common data models for the health profile core
// ABOUTME: Re-exports the profile document type and its merge semantics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Common data models

/// Profile document representation and deep-merge semantics
pub mod profile;

pub use profile::{deep_merge, merge_documents, ProfileDocument};
