//! Diagnosis categories and their display catalogue.
//!
//! Every record carries one 0/1 flag per category. The catalogue entries are
//! process-wide constants; there is no way to mutate them at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OculyxError;

/// One-letter diagnosis category, also used as the spreadsheet column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiseaseCode {
    /// Normal
    N,
    /// Diabetic retinopathy
    D,
    /// Glaucoma
    G,
    /// Cataract
    C,
    /// Age-related macular degeneration
    A,
    /// Hypertensive retinopathy
    H,
    /// Pathological myopia
    M,
    /// Other
    O,
}

/// Display metadata for a diagnosis category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub code: DiseaseCode,
    pub label: &'static str,
    /// Hex colour used for this category in charts.
    pub color: &'static str,
    /// Name of the disease feature in the importance tables, for the
    /// categories that have authored explainability data.
    pub feature: Option<&'static str>,
}

static CATALOGUE: [DiseaseInfo; 8] = [
    DiseaseInfo { code: DiseaseCode::N, label: "正常",   color: "#4096ff", feature: None },
    DiseaseInfo { code: DiseaseCode::D, label: "糖尿病", color: "#ff7a45", feature: Some("糖尿病视网膜病变") },
    DiseaseInfo { code: DiseaseCode::G, label: "青光眼", color: "#7cb5ec", feature: Some("青光眼") },
    DiseaseInfo { code: DiseaseCode::C, label: "白内障", color: "#2ca02c", feature: Some("白内障") },
    DiseaseInfo { code: DiseaseCode::A, label: "AMD",    color: "#d62728", feature: Some("干/湿性老年黄斑病变") },
    DiseaseInfo { code: DiseaseCode::H, label: "高血压", color: "#9467bd", feature: Some("高血压视网膜病变") },
    DiseaseInfo { code: DiseaseCode::M, label: "近视",   color: "#8c564b", feature: Some("病理性近视") },
    DiseaseInfo { code: DiseaseCode::O, label: "其他",   color: "#EE82EE", feature: None },
];

impl DiseaseCode {
    /// All categories in column order.
    pub const ALL: [DiseaseCode; 8] = [
        DiseaseCode::N,
        DiseaseCode::D,
        DiseaseCode::G,
        DiseaseCode::C,
        DiseaseCode::A,
        DiseaseCode::H,
        DiseaseCode::M,
        DiseaseCode::O,
    ];

    /// Categories with authored feature-importance data.
    pub const EXPLAINABLE: [DiseaseCode; 6] = [
        DiseaseCode::D,
        DiseaseCode::G,
        DiseaseCode::C,
        DiseaseCode::A,
        DiseaseCode::H,
        DiseaseCode::M,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseCode::N => "N",
            DiseaseCode::D => "D",
            DiseaseCode::G => "G",
            DiseaseCode::C => "C",
            DiseaseCode::A => "A",
            DiseaseCode::H => "H",
            DiseaseCode::M => "M",
            DiseaseCode::O => "O",
        }
    }

    /// Position in [`DiseaseCode::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn info(&self) -> &'static DiseaseInfo {
        &CATALOGUE[self.index()]
    }

    pub fn is_explainable(&self) -> bool {
        self.info().feature.is_some()
    }
}

impl fmt::Display for DiseaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiseaseCode {
    type Err = OculyxError;

    /// Exact, case-sensitive match on the one-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiseaseCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| OculyxError::UnknownDiseaseCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_indexed_by_code() {
        for code in DiseaseCode::ALL {
            assert_eq!(code.info().code, code);
        }
    }

    #[test]
    fn test_only_six_codes_are_explainable() {
        let explainable: Vec<_> = DiseaseCode::ALL
            .into_iter()
            .filter(DiseaseCode::is_explainable)
            .collect();
        assert_eq!(explainable, DiseaseCode::EXPLAINABLE.to_vec());
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("D".parse::<DiseaseCode>().unwrap(), DiseaseCode::D);
        assert!("d".parse::<DiseaseCode>().is_err());
        assert!(matches!(
            "Z".parse::<DiseaseCode>(),
            Err(OculyxError::UnknownDiseaseCode(code)) if code == "Z"
        ));
    }
}
