//! Workbook retrieval from the local filesystem.

use async_trait::async_trait;
use oculyx_common::{OculyxError, Result};
use std::path::PathBuf;
use tracing::{debug, instrument};

use super::WorkbookSource;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WorkbookSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<u8>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| OculyxError::SourceUnavailable {
                source_name: self.path.display().to_string(),
                status: None,
                detail: e.to_string(),
            })?;
        debug!(len = bytes.len(), "Read workbook");
        Ok(bytes)
    }
}
