use thiserror::Error;

#[derive(Debug, Error)]
pub enum OculyxError {
    /// The workbook bytes could not be retrieved. `status` carries the HTTP
    /// status code when the failure came from a response.
    #[error("Source unavailable ({source_name}{}): {detail}", http_status(.status))]
    SourceUnavailable {
        source_name: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("Empty workbook: {reason}")]
    EmptyWorkbook { reason: String },

    #[error("Schema violation: missing required fields: {}", .missing.join(", "))]
    SchemaViolation { missing: Vec<String> },

    #[error("Workbook format error: {0}")]
    WorkbookFormat(String),

    #[error("Unknown disease code: {0:?}")]
    UnknownDiseaseCode(String),

    #[error("Insufficient data: no valid records after filtering ({excluded} excluded)")]
    InsufficientData { excluded: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn http_status(status: &Option<u16>) -> String {
    status.map(|s| format!(", HTTP {s}")).unwrap_or_default()
}

impl OculyxError {
    /// Whether re-running ingestion unchanged may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, OculyxError::SourceUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, OculyxError>;
