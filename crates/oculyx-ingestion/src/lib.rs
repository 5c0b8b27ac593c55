//! oculyx-ingestion — Cohort spreadsheet ingestion.
//!
//! - Workbook retrieval (HTTP, local file, in-memory bytes)
//! - Workbook decoding (xlsx / xls / xlsb / ods via calamine)
//! - Schema validation of the first sheet
//! - Per-row coercion into [`oculyx_common::Record`]

pub mod sources;
pub mod workbook;
pub mod validator;
pub mod pipeline;

pub use pipeline::{ingest, ingest_workbook, Ingested};
pub use sources::WorkbookSource;
