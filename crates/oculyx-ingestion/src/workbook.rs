//! Workbook decoding.
//!
//! Turns raw workbook bytes into header-keyed rows of the first sheet:
//!   - the first row of the sheet's used range is the header row
//!   - every later row becomes a mapping header → cell value
//!   - empty cells are omitted from the mapping
//!   - rows with no non-empty cell are skipped
//!   - a repeated header is renamed `<header>_1`, `<header>_2`, ... so both
//!     columns stay addressable
//!
//! Only the first sheet is read; the names of all sheets are kept so the
//! validator can tell an empty workbook from an empty sheet.

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use oculyx_common::{OculyxError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::io::Cursor;
use tracing::{debug, warn};

/// A non-empty cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// Integer value of a numeric cell, if it holds a whole number.
    pub fn as_whole_number(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One data row: header → cell, empty cells absent.
pub type RawRow = BTreeMap<String, CellValue>;

/// Decoded view of a workbook: every sheet name plus the rows of the first sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawWorkbook {
    pub sheet_names: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawWorkbook {
    pub fn first_sheet_name(&self) -> Option<&str> {
        self.sheet_names.first().map(String::as_str)
    }
}

/// Decode workbook bytes. The format is detected from the content.
///
/// Fails with `OculyxError::WorkbookFormat` when the bytes are not a workbook.
pub fn decode(bytes: Vec<u8>) -> Result<RawWorkbook> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| OculyxError::WorkbookFormat(e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    let Some(first) = sheet_names.first() else {
        return Ok(RawWorkbook { sheet_names, rows: Vec::new() });
    };

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| OculyxError::WorkbookFormat(format!("sheet {first:?}: {e}")))?;

    let rows = rows_from_range(&range);
    debug!(sheet = %first, sheets = sheet_names.len(), rows = rows.len(), "Decoded workbook");

    Ok(RawWorkbook { sheet_names, rows })
}

/// Header-keyed rows of a sheet range.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut iter = range.rows();
    let Some(header_row) = iter.next() else {
        return Vec::new();
    };

    let headers = header_names(header_row);

    iter.filter_map(|cells| {
        let row: RawRow = headers
            .iter()
            .zip(cells.iter())
            .filter_map(|(header, cell)| {
                let header = header.as_ref()?;
                Some((header.clone(), cell_value(cell)?))
            })
            .collect();
        (!row.is_empty()).then_some(row)
    })
    .collect()
}

/// Column names from the header row. Columns without a header cannot be
/// addressed by name and map to `None`.
fn header_names(header_row: &[Data]) -> Vec<Option<String>> {
    let mut seen = HashSet::new();
    header_row
        .iter()
        .map(|cell| {
            let header = match cell {
                Data::Empty => return None,
                other => other.to_string(),
            };
            if header.is_empty() {
                return None;
            }
            if seen.insert(header.clone()) {
                return Some(header);
            }
            let renamed = (1..)
                .map(|n| format!("{header}_{n}"))
                .find(|candidate| !seen.contains(candidate))?;
            warn!(header = %header, renamed = %renamed, "Duplicate column header");
            seen.insert(renamed.clone());
            Some(renamed)
        })
        .collect()
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Float(f) => Some(CellValue::Float(*f)),
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(_) | Data::Empty => None,
    }
}
