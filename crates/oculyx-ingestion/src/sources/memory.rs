//! In-memory workbook bytes, for callers that already hold the file.

use async_trait::async_trait;
use oculyx_common::Result;

use super::WorkbookSource;

#[derive(Debug, Clone)]
pub struct BytesSource {
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }
}

#[async_trait]
impl WorkbookSource for BytesSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
