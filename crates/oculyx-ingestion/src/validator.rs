//! Workbook-level validation and per-row coercion.
//!
//! Only a structurally empty or schema-violating workbook is fatal. Individual
//! rows whose cells do not coerce are kept as records with the offending field
//! absent, which makes them invalid for aggregation without aborting ingestion.

use oculyx_common::records::{
    COLUMN_AGE, COLUMN_ID, COLUMN_LEFT_EYE_KEYWORDS, COLUMN_RIGHT_EYE_KEYWORDS, COLUMN_SEX,
    REQUIRED_FIELDS,
};
use oculyx_common::{DiagnosisFlags, DiseaseCode, OculyxError, Record, Result, Sex};

use crate::workbook::{CellValue, RawRow, RawWorkbook};

/// Check the workbook structure and hand back its data rows.
///
/// The required fields are checked against the first data row; every missing
/// field is reported in one error, in declaration order.
pub fn validate(workbook: RawWorkbook) -> Result<Vec<RawRow>> {
    let Some(sheet) = workbook.first_sheet_name() else {
        return Err(OculyxError::EmptyWorkbook {
            reason: "workbook contains no sheets".to_string(),
        });
    };

    let Some(first) = workbook.rows.first() else {
        return Err(OculyxError::EmptyWorkbook {
            reason: format!("sheet {sheet:?} contains no data rows"),
        });
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !first.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(OculyxError::SchemaViolation { missing });
    }

    Ok(workbook.rows)
}

/// Convert one raw row into a [`Record`].
pub fn coerce_row(row: &RawRow) -> Record {
    let mut diagnosis = DiagnosisFlags::default();
    for code in DiseaseCode::ALL {
        if row.get(code.as_str()).is_some_and(is_flag_set) {
            diagnosis.set(code);
        }
    }

    Record {
        id: row.get(COLUMN_ID).and_then(coerce_id),
        age: row.get(COLUMN_AGE).and_then(coerce_age),
        sex: row.get(COLUMN_SEX).and_then(CellValue::as_text).and_then(Sex::from_cell),
        diagnosis,
        left_eye_keywords: row.get(COLUMN_LEFT_EYE_KEYWORDS).and_then(coerce_text),
        right_eye_keywords: row.get(COLUMN_RIGHT_EYE_KEYWORDS).and_then(coerce_text),
    }
}

/// Ages are whole, non-negative numbers; numeric text is accepted.
fn coerce_age(cell: &CellValue) -> Option<u32> {
    match cell {
        CellValue::Text(s) => s.trim().parse::<u32>().ok(),
        other => other.as_whole_number().and_then(|n| u32::try_from(n).ok()),
    }
}

fn coerce_id(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Text(s) => s.trim().parse::<i64>().ok(),
        other => other.as_whole_number(),
    }
}

/// A diagnosis flag counts only when the cell holds the number 1.
fn is_flag_set(cell: &CellValue) -> bool {
    cell.as_whole_number() == Some(1)
}

fn coerce_text(cell: &CellValue) -> Option<String> {
    let s = cell.as_text()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}
