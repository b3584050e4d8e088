// ABOUTME: Draft profile store merging partial form updates into a persisted document
// ABOUTME: Tracks the server-issued profile identifier and syncs with the remote API
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Profile draft store
//!
//! The form flow writes the profile one page at a time; each page hands a
//! partial document to [`ProfileStore::save_draft`], which deep-merges it
//! over the persisted draft. The store also carries the server-issued
//! profile identifier across restarts so later saves address the same
//! remote profile. Both capabilities it depends on (key/value storage, the
//! remote profile API) come in by injection.

use crate::constants::keys;
use crate::errors::{AppError, AppResult};
use crate::external::profile_api::ProfileApi;
use crate::models::{merge_documents, ProfileDocument};
use crate::storage::StorageProvider;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Draft profile store
///
/// One in-progress draft plus one persisted profile identifier, scoped to
/// the single anonymous local user.
pub struct ProfileStore<S, A> {
    storage: S,
    api: A,
    /// Serializes the read-merge-write window of `save_draft` so overlapping
    /// saves from the form flow cannot drop each other's sections
    save_lock: Mutex<()>,
}

impl<S, A> ProfileStore<S, A>
where
    S: StorageProvider,
    A: ProfileApi,
{
    /// Create a store over the injected storage and remote API capabilities
    pub fn new(storage: S, api: A) -> Self {
        Self {
            storage,
            api,
            save_lock: Mutex::new(()),
        }
    }

    /// Load the persisted draft
    ///
    /// A missing key, an empty value, and a corrupt value all read as the
    /// empty document: the draft is re-creatable form state and a decode
    /// problem must never strand the form flow. Storage I/O failures do
    /// propagate.
    pub async fn load_draft(&self) -> AppResult<ProfileDocument> {
        let raw = self.storage.get(keys::PROFILE_DRAFT).await?;

        let Some(raw) = raw.filter(|value| !value.is_empty()) else {
            return Ok(ProfileDocument::new());
        };

        match serde_json::from_str::<ProfileDocument>(&raw) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(error = %e, "Persisted draft is not valid JSON, starting over empty");
                Ok(ProfileDocument::new())
            }
        }
    }

    /// Deep-merge `partial` over the persisted draft and persist the result
    ///
    /// Returns the merged document this call committed. Calls are serialized
    /// internally, so the returned document always reflects the draft state
    /// actually written.
    pub async fn save_draft(&self, partial: &ProfileDocument) -> AppResult<ProfileDocument> {
        let _guard = self.save_lock.lock().await;

        let current = self.load_draft().await?;
        let merged = merge_documents(&current, partial);

        let encoded = serde_json::to_string(&merged).map_err(|e| {
            AppError::serialization("cannot encode draft document").with_source(e)
        })?;
        self.storage.set(keys::PROFILE_DRAFT, &encoded).await?;

        debug!(sections = merged.len(), "Draft saved");
        Ok(merged)
    }

    /// Remove the persisted draft
    ///
    /// The profile identifier deliberately survives: the remote profile
    /// still exists and a fresh draft will update it rather than create a
    /// second one.
    pub async fn clear_draft(&self) -> AppResult<()> {
        self.storage.remove(keys::PROFILE_DRAFT).await
    }

    /// Read the stored profile identifier, `None` when unset
    pub async fn profile_id(&self) -> AppResult<Option<String>> {
        Ok(self
            .storage
            .get(keys::PROFILE_ID)
            .await?
            .filter(|id| !id.is_empty()))
    }

    /// Store the server-issued profile identifier
    pub async fn set_profile_id(&self, id: &str) -> AppResult<()> {
        self.storage.set(keys::PROFILE_ID, id).await
    }

    /// Push the whole current draft to the remote profile API
    ///
    /// Sends the draft together with the known identifier (absent before
    /// the first save). On success the returned identifier is stored and
    /// the server's canonical profile is handed back. Remote failures
    /// surface to the caller unretried.
    pub async fn persist_to_server(&self) -> AppResult<ProfileDocument> {
        let draft = self.load_draft().await?;
        let known_id = self.profile_id().await?;

        let saved = self
            .api
            .save_profile(&draft, known_id.as_deref())
            .await?;

        self.set_profile_id(&saved.profile_id).await?;
        info!(
            profile_id = %saved.profile_id,
            first_save = known_id.is_none(),
            "Profile persisted to remote"
        );

        Ok(saved.profile)
    }

    /// Fetch the remote profile addressed by the stored identifier
    ///
    /// Answers `Ok(None)` without any network traffic when no identifier
    /// has been issued yet.
    pub async fn fetch_profile(&self) -> AppResult<Option<ProfileDocument>> {
        let Some(id) = self.profile_id().await? else {
            debug!("No profile identifier stored, skipping remote fetch");
            return Ok(None);
        };

        let profile = self.api.fetch_profile(&id).await?;
        Ok(Some(profile))
    }
}
