//! Workbook retrieval over HTTP(S).
//!
//! The dashboard deployment serves the cohort file as a static asset
//! (e.g. `/store/all_eye.xlsx`); any URL returning the raw workbook works.

use async_trait::async_trait;
use oculyx_common::{OculyxError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};

use super::WorkbookSource;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| OculyxError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn unavailable(&self, status: Option<u16>, detail: impl Into<String>) -> OculyxError {
        OculyxError::SourceUnavailable {
            source_name: self.url.clone(),
            status,
            detail: detail.into(),
        }
    }
}

#[async_trait]
impl WorkbookSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.unavailable(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(self.unavailable(
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| self.unavailable(Some(status.as_u16()), e.to_string()))?;

        debug!(len = bytes.len(), "Fetched workbook");
        Ok(bytes.to_vec())
    }
}
