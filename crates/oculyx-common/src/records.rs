//! Typed representation of one patient row of the cohort spreadsheet.

use serde::{Deserialize, Serialize};

use crate::disease::DiseaseCode;

// ---------------------------------------------------------------------------
// Column headers (exact match, as authored in the source workbook)
// ---------------------------------------------------------------------------

pub const COLUMN_ID: &str = "编号";
pub const COLUMN_AGE: &str = "病人年龄";
pub const COLUMN_SEX: &str = "病人性别";
pub const COLUMN_LEFT_EYE_KEYWORDS: &str = "左眼诊断关键词";
pub const COLUMN_RIGHT_EYE_KEYWORDS: &str = "右眼诊断关键词";

/// Fields the first data row must carry for the workbook to be accepted.
pub const REQUIRED_FIELDS: [&str; 2] = [COLUMN_AGE, COLUMN_SEX];

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the cell value used by the source workbook. Exact match on `男` / `女`.
    pub fn from_cell(value: &str) -> Option<Self> {
        match value {
            "男" => Some(Sex::Male),
            "女" => Some(Sex::Female),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnosis flags
// ---------------------------------------------------------------------------

/// Multi-label diagnosis flags, one per [`DiseaseCode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosisFlags([bool; 8]);

impl DiagnosisFlags {
    pub fn set(&mut self, code: DiseaseCode) {
        self.0[code.index()] = true;
    }

    pub fn with(mut self, code: DiseaseCode) -> Self {
        self.set(code);
        self
    }

    pub fn is_set(&self, code: DiseaseCode) -> bool {
        self.0[code.index()]
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    /// Codes whose flag is 1, in column order.
    pub fn iter_set(&self) -> impl Iterator<Item = DiseaseCode> + '_ {
        DiseaseCode::ALL.into_iter().filter(|c| self.is_set(*c))
    }
}

impl FromIterator<DiseaseCode> for DiagnosisFlags {
    fn from_iter<I: IntoIterator<Item = DiseaseCode>>(iter: I) -> Self {
        let mut flags = DiagnosisFlags::default();
        for code in iter {
            flags.set(code);
        }
        flags
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One patient row after type coercion. Absent or non-coercible cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// External reference only; not used by aggregation.
    pub id: Option<i64>,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub diagnosis: DiagnosisFlags,
    pub left_eye_keywords: Option<String>,
    pub right_eye_keywords: Option<String>,
}

impl Record {
    pub fn new(age: Option<u32>, sex: Option<Sex>, diagnosis: DiagnosisFlags) -> Self {
        Self {
            age,
            sex,
            diagnosis,
            ..Default::default()
        }
    }

    /// A record takes part in cohort statistics only with an age, a sex and
    /// at least one diagnosis flag set.
    pub fn is_valid(&self) -> bool {
        self.age.is_some() && self.sex.is_some() && self.diagnosis.any()
    }
}
