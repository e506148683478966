//! OCR seam for image uploads.
//!
//! OCR is an external sidecar, not something this service performs itself.
//! Availability is a deployment-time capability known before any call, so
//! handlers can reject image uploads up front instead of discovering the
//! gap per-request.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Capability flag; checked before `recognize` is ever called.
    fn available(&self) -> bool;

    /// Recognizes text in image bytes.
    async fn recognize(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Builds the OCR engine for this deployment: HTTP-backed when a service
/// URL is configured, otherwise disabled.
pub fn from_config(service_url: Option<&str>) -> Arc<dyn OcrEngine> {
    match service_url {
        Some(url) => {
            info!(url, "OCR service configured");
            Arc::new(HttpOcrEngine::new(url.to_string()))
        }
        None => Arc::new(OcrDisabled),
    }
}

/// OCR delegated to an HTTP sidecar: POST /recognize with the raw image
/// body, JSON `{"text": "..."}` back.
pub struct HttpOcrEngine {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    text: String,
}

impl HttpOcrEngine {
    pub fn new(base_url: String) -> Self {
        HttpOcrEngine {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for HttpOcrEngine {
    fn available(&self) -> bool {
        true
    }

    async fn recognize(&self, bytes: &[u8]) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/recognize", self.base_url))
            .header("content-type", "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .await?
            .error_for_status()?;
        let body: RecognizeResponse = response.json().await?;
        Ok(body.text)
    }
}

/// The no-OCR deployment. `recognize` is unreachable because callers gate
/// on `available()` first.
pub struct OcrDisabled;

#[async_trait]
impl OcrEngine for OcrDisabled {
    fn available(&self) -> bool {
        false
    }

    async fn recognize(&self, _bytes: &[u8]) -> anyhow::Result<String> {
        anyhow::bail!("OCR is not available at this deployment")
    }
}
