//! End-to-end ingestion for one attempt:
//!   1. Fetch the workbook bytes from the source
//!   2. Decode the first sheet into header-keyed rows
//!   3. Validate the workbook structure and required fields
//!   4. Coerce every row into a `Record`
//!
//! Any failure aborts the attempt; nothing is cached between attempts, so
//! retrying means calling [`ingest`] again.

use oculyx_common::{OculyxError, Record, Result};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::sources::WorkbookSource;
use crate::validator::{coerce_row, validate};
use crate::workbook::{self, RawWorkbook};

/// Outcome of a successful ingestion attempt.
#[derive(Debug, Clone, Serialize)]
pub struct Ingested {
    /// Name of the sheet the rows were read from.
    pub sheet: String,
    /// One record per non-blank data row, in sheet order. Includes rows that
    /// are invalid for aggregation.
    pub records: Vec<Record>,
}

impl Ingested {
    pub fn rows_read(&self) -> usize {
        self.records.len()
    }

    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_valid()).count()
    }
}

/// Fetch, decode and validate the workbook behind `source`.
#[instrument(skip(source), fields(source = source.name()))]
pub async fn ingest(source: &dyn WorkbookSource) -> Result<Ingested> {
    let bytes = source.fetch().await.inspect_err(|e| {
        warn!(error = %e, "Workbook fetch failed");
    })?;

    // Decoding is CPU-bound; keep it off the async worker threads.
    let decoded = tokio::task::spawn_blocking(move || workbook::decode(bytes))
        .await
        .map_err(|e| OculyxError::WorkbookFormat(format!("decoder task failed: {e}")))??;

    ingest_workbook(decoded)
}

/// Validate an already-decoded workbook and coerce its rows.
pub fn ingest_workbook(workbook: RawWorkbook) -> Result<Ingested> {
    let sheet = workbook.first_sheet_name().unwrap_or_default().to_string();
    let rows = validate(workbook).inspect_err(|e| {
        warn!(error = %e, "Workbook rejected");
    })?;

    let records: Vec<Record> = rows.iter().map(coerce_row).collect();
    let ingested = Ingested { sheet, records };

    info!(
        sheet = %ingested.sheet,
        rows = ingested.rows_read(),
        valid = ingested.valid_count(),
        "Ingested cohort workbook"
    );
    Ok(ingested)
}
