//! Byte sources for the cohort workbook.

pub mod file;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use oculyx_common::Result;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::BytesSource;

/// Common interface for anything that can hand over the raw workbook bytes.
///
/// Every call performs a fresh read; implementations keep no state between
/// attempts, so a failed fetch can simply be retried.
#[async_trait]
pub trait WorkbookSource: Send + Sync {
    /// Short name used in logs and error reports.
    fn name(&self) -> &str;

    /// Retrieve the complete workbook.
    ///
    /// Fails with `OculyxError::SourceUnavailable` when the bytes cannot be read.
    async fn fetch(&self) -> Result<Vec<u8>>;
}
