// ABOUTME: Remote profile API client for saving and fetching the health profile
// ABOUTME: Implements the save/fetch envelope contract plus a mock for testing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Profile API client
//!
//! Speaks the profile backend's envelope contract:
//! `POST {base}/profile/save` with `{"profile": ..., "profile_id": ...}` and
//! `GET {base}/profile/{id}`, both answering
//! `{ok, profile_id, profile, error?}`. The profile identifier is issued by
//! the server on the first successful save and echoed back on every later
//! call; this client never invents one.

use crate::config::environment::ProfileApiConfig;
use crate::errors::{AppError, AppResult};
use crate::models::ProfileDocument;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Service name used in error messages
const SERVICE: &str = "Profile API";

/// Result of a successful profile save
#[derive(Debug, Clone, PartialEq)]
pub struct SavedProfile {
    /// Server-issued identifier addressing the persisted profile
    pub profile_id: String,
    /// The server's canonical copy of the profile
    pub profile: ProfileDocument,
}

/// Remote profile persistence capability
///
/// The draft store depends on this trait rather than on the HTTP client so
/// tests can count and script remote calls.
#[async_trait::async_trait]
pub trait ProfileApi: Send + Sync {
    /// Persist the full profile, passing the known identifier when one exists
    async fn save_profile(
        &self,
        profile: &ProfileDocument,
        profile_id: Option<&str>,
    ) -> AppResult<SavedProfile>;

    /// Fetch the profile stored under `profile_id`
    async fn fetch_profile(&self, profile_id: &str) -> AppResult<ProfileDocument>;
}

/// Request body for the save endpoint
#[derive(Serialize)]
struct SaveRequest<'a> {
    profile: &'a ProfileDocument,
    profile_id: Option<&'a str>,
}

/// Response envelope shared by the save and fetch endpoints
#[derive(Deserialize)]
struct ProfileEnvelope {
    ok: bool,
    #[serde(default)]
    profile_id: Option<String>,
    #[serde(default)]
    profile: Option<ProfileDocument>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the profile backend
pub struct ProfileApiClient {
    config: ProfileApiConfig,
    http_client: reqwest::Client,
}

impl ProfileApiClient {
    /// Create a client with the configured base address and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: ProfileApiConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Unwrap the shared response envelope, mapping failure shapes to errors
    fn unwrap_envelope(status: reqwest::StatusCode, envelope: ProfileEnvelope) -> AppResult<ProfileEnvelope> {
        if envelope.ok {
            Ok(envelope)
        } else {
            // Server said no; prefer its own wording over the bare status
            let message = envelope
                .error
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            Err(AppError::remote(SERVICE, message))
        }
    }

    /// Read a response into the envelope, handling the non-2xx path
    async fn read_envelope(response: reqwest::Response) -> AppResult<ProfileEnvelope> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(
                SERVICE,
                format!("HTTP {}: {body}", status.as_u16()),
            ));
        }

        let envelope: ProfileEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::remote(SERVICE, format!("JSON parse error: {e}")))?;
        Self::unwrap_envelope(status, envelope)
    }
}

#[async_trait::async_trait]
impl ProfileApi for ProfileApiClient {
    async fn save_profile(
        &self,
        profile: &ProfileDocument,
        profile_id: Option<&str>,
    ) -> AppResult<SavedProfile> {
        let url = format!("{}/profile/save", self.config.base_url);
        debug!(url = %url, has_id = profile_id.is_some(), "Saving profile to remote");

        let response = self
            .http_client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SaveRequest {
                profile,
                profile_id,
            })
            .send()
            .await
            .map_err(|e| AppError::network(SERVICE, e.to_string()))?;

        let envelope = Self::read_envelope(response).await?;
        let profile_id = envelope
            .profile_id
            .ok_or_else(|| AppError::remote(SERVICE, "save response carried no profile_id"))?;

        Ok(SavedProfile {
            profile_id,
            profile: envelope.profile.unwrap_or_default(),
        })
    }

    async fn fetch_profile(&self, profile_id: &str) -> AppResult<ProfileDocument> {
        let url = format!("{}/profile/{profile_id}", self.config.base_url);
        debug!(url = %url, "Fetching profile from remote");

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::network(SERVICE, e.to_string()))?;

        let envelope = Self::read_envelope(response).await?;
        Ok(envelope.profile.unwrap_or_default())
    }
}

/// Scriptable profile API for tests (no network)
///
/// Counts calls so tests can assert that an operation short-circuited
/// without touching the transport. Clones share the counters, so a test can
/// hand one handle to the store and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockProfileApi {
    /// Profile the mock answers with; `None` scripts a remote failure
    canned_profile: Option<ProfileDocument>,
    /// Error message used when scripting failures
    failure_message: Option<String>,
    save_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
}

impl MockProfileApi {
    /// Mock that accepts every call and echoes the submitted profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that answers fetches with `profile`
    #[must_use]
    pub fn with_profile(profile: ProfileDocument) -> Self {
        Self {
            canned_profile: Some(profile),
            ..Self::default()
        }
    }

    /// Mock that fails every call with a remote error carrying `message`
    #[must_use]
    pub fn failing_with(message: impl Into<String>) -> Self {
        Self {
            failure_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of `save_profile` calls observed
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_profile` calls observed
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ProfileApi for MockProfileApi {
    async fn save_profile(
        &self,
        profile: &ProfileDocument,
        profile_id: Option<&str>,
    ) -> AppResult<SavedProfile> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure_message {
            return Err(AppError::remote(SERVICE, message.clone()));
        }

        // First save issues a fresh identifier, later saves confirm the known one
        let profile_id = profile_id.map_or_else(
            || uuid::Uuid::new_v4().to_string(),
            std::string::ToString::to_string,
        );

        Ok(SavedProfile {
            profile_id,
            profile: profile.clone(),
        })
    }

    async fn fetch_profile(&self, _profile_id: &str) -> AppResult<ProfileDocument> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure_message {
            return Err(AppError::remote(SERVICE, message.clone()));
        }

        Ok(self.canned_profile.clone().unwrap_or_default())
    }
}
