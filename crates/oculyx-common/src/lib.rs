//! oculyx-common — Shared record schema, disease catalogue and error taxonomy
//! used across all Oculyx crates.

pub mod error;
pub mod disease;
pub mod records;

// Re-export commonly used types
pub use disease::{DiseaseCode, DiseaseInfo};
pub use error::{OculyxError, Result};
pub use records::{DiagnosisFlags, Record, Sex};
