// ABOUTME: Label analysis API client sending captured label images for assessment
// ABOUTME: Supports multipart file, device-asset, and base64 JSON request variants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Label analysis client
//!
//! One logical endpoint, `POST {base}/label/analyze`, reached through three
//! payload encodings depending on what the capture flow produced: raw bytes
//! already in hand, a device asset descriptor still pointing at the platform
//! store, or a base64 string straight from the camera preview. The analysis
//! result is backend-defined JSON and is passed through unchanged; the
//! screens own interpreting it.

use crate::config::environment::LabelApiConfig;
use crate::errors::{AppError, AppResult};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Service name used in error messages
const SERVICE: &str = "Label API";

/// File name used when an asset descriptor carries none and its URI has no
/// usable final segment
const DEFAULT_FILE_NAME: &str = "image.jpg";

/// MIME type used when an asset descriptor carries none
const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Platform asset descriptor as delivered by the image picker
///
/// Older picker versions put the MIME type in a `type` field; both spellings
/// are accepted and the newer one wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Platform URI of the captured image (plain path or `file://`)
    pub uri: String,
    /// Picker-provided file name, when present
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Picker-provided MIME type, when present
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// MIME type under the legacy field name
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub legacy_type: Option<String>,
}

impl ImageAsset {
    /// File name to attach to the multipart field
    #[must_use]
    pub fn resolved_file_name(&self) -> &str {
        if let Some(name) = self.file_name.as_deref() {
            return name;
        }
        match self.uri.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment,
            _ => DEFAULT_FILE_NAME,
        }
    }

    /// MIME type to attach to the multipart field
    #[must_use]
    pub fn resolved_mime_type(&self) -> &str {
        self.mime_type
            .as_deref()
            .or(self.legacy_type.as_deref())
            .unwrap_or(DEFAULT_MIME_TYPE)
    }

    /// Local filesystem path behind the URI
    fn local_path(&self) -> &str {
        self.uri.strip_prefix("file://").unwrap_or(&self.uri)
    }
}

/// Base64 request body
#[derive(Serialize)]
struct Base64Request<'a> {
    image_base64: &'a str,
}

/// HTTP client for the label analysis backend
pub struct LabelApiClient {
    config: LabelApiConfig,
    http_client: reqwest::Client,
}

impl LabelApiClient {
    /// Create a client with the configured base address and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: LabelApiConfig) -> AppResult<Self> {
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

    fn endpoint(&self) -> String {
        format!("{}/label/analyze", self.config.base_url)
    }

    /// Analyze a label image already loaded into memory
    ///
    /// Sends the bytes as a multipart field named `file`. No part
    /// content-type is set; the transport supplies the multipart boundary
    /// and the backend sniffs the image format itself.
    pub async fn analyze_file(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<Value> {
        debug!(file_name = %file_name, size = bytes.len(), "Analyzing label from raw bytes");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.send_multipart(form).await
    }

    /// Analyze a label image still held by the platform as an asset
    ///
    /// Resolves the file name and MIME type from the descriptor, reads the
    /// bytes behind the URI, and sends the same multipart shape as
    /// [`Self::analyze_file`].
    pub async fn analyze_asset(&self, asset: &ImageAsset) -> AppResult<Value> {
        let file_name = asset.resolved_file_name().to_string();
        let mime_type = asset.resolved_mime_type().to_string();
        debug!(uri = %asset.uri, file_name = %file_name, mime = %mime_type, "Analyzing label from device asset");

        let bytes = tokio::fs::read(asset.local_path()).await.map_err(|e| {
            AppError::invalid_input(format!("cannot read image asset {}: {e}", asset.uri))
        })?;

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&mime_type)
            .map_err(|e| {
                AppError::invalid_input(format!("invalid MIME type {mime_type:?}: {e}"))
            })?;
        let form = Form::new().part("file", part);
        self.send_multipart(form).await
    }

    /// Analyze a label image supplied as a data-URL or raw base64 string
    ///
    /// The string is forwarded unchanged in a JSON body; the backend accepts
    /// both encodings.
    pub async fn analyze_base64(&self, data: &str) -> AppResult<Value> {
        debug!(size = data.len(), "Analyzing label from base64 payload");

        let response = self
            .http_client
            .post(self.endpoint())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&Base64Request { image_base64: data })
            .send()
            .await
            .map_err(|e| AppError::network(SERVICE, e.to_string()))?;

        Self::read_result(response).await
    }

    async fn send_multipart(&self, form: Form) -> AppResult<Value> {
        let response = self
            .http_client
            .post(self.endpoint())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::network(SERVICE, e.to_string()))?;

        Self::read_result(response).await
    }

    /// Decode the backend's JSON answer, mapping non-2xx to a remote error
    async fn read_result(response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(
                SERVICE,
                format!("HTTP {}: {body}", status.as_u16()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::remote(SERVICE, format!("JSON parse error: {e}")))
    }
}
