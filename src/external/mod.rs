// ABOUTME: Clients for the remote backends the core talks to
// ABOUTME: Covers the profile save/fetch API and the label analysis API
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External service clients
//!
//! The two backends are external collaborators: only their request/response
//! contracts matter here. Each client maps a non-2xx response or failure
//! payload to a `RemoteError` and a transport failure to a `NetworkError`,
//! and never retries on its own.

/// Label analysis endpoint client
pub mod label_api;
/// Profile save/fetch endpoint client
pub mod profile_api;

pub use label_api::{ImageAsset, LabelApiClient};
pub use profile_api::{MockProfileApi, ProfileApi, ProfileApiClient, SavedProfile};
