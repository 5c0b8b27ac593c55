//! Per-disease feature importance registry.
//!
//! Each explainable diagnosis category has three ranked predictive features
//! (patient age, the disease finding itself, patient sex) with independently
//! authored weights in [0, 1], plus the pairwise correlations between them.
//! Weights are not normalised and need not sum to 1.

use oculyx_common::records::{COLUMN_AGE, COLUMN_SEX};
use oculyx_common::{DiseaseCode, OculyxError, Result};
use serde::Serialize;

use crate::correlation::{correlation_of, grid, CorrelationCell, FeaturePair};
use crate::rules::{self, DecisionRule};

/// Weight of one predictive feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

/// Importance list and correlation table for one diagnosis category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportanceEntry {
    pub code: DiseaseCode,
    /// Authored order.
    pub importances: [FeatureImportance; 3],
    pub correlations: [FeaturePair; 3],
    /// Decision-tree rule chain, evaluated top to bottom.
    pub rules: &'static [DecisionRule],
}

impl FeatureImportanceEntry {
    /// Feature names in authored order.
    pub fn features(&self) -> [&'static str; 3] {
        self.importances.map(|f| f.feature)
    }

    /// Features sorted by descending importance. Ties keep authored order.
    pub fn ranked(&self) -> Vec<FeatureImportance> {
        let mut sorted = self.importances.to_vec();
        sorted.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        sorted
    }

    pub fn total_importance(&self) -> f64 {
        self.importances.iter().map(|f| f.importance).sum()
    }

    /// Correlation between two listed features, symmetric, 1 on the diagonal.
    /// `None` if either feature is not part of this entry.
    pub fn correlation(&self, x: &str, y: &str) -> Option<f64> {
        let listed = self.features();
        if !listed.iter().any(|f| *f == x) || !listed.iter().any(|f| *f == y) {
            return None;
        }
        Some(correlation_of(&self.correlations, x, y))
    }

    /// Full correlation grid over the listed features, in authored order.
    pub fn correlation_matrix(&self) -> Vec<CorrelationCell> {
        grid(&self.features(), &self.correlations)
    }
}

// ── Authored tables ─────────────────────────────────────────────────────────

const AGE: &str = COLUMN_AGE;
const SEX: &str = COLUMN_SEX;

const fn entry(
    code: DiseaseCode,
    finding: &'static str,
    weights: [f64; 3],
    age_finding: f64,
    finding_sex: f64,
    rules: &'static [DecisionRule],
) -> FeatureImportanceEntry {
    FeatureImportanceEntry {
        code,
        importances: [
            FeatureImportance { feature: AGE, importance: weights[0] },
            FeatureImportance { feature: finding, importance: weights[1] },
            FeatureImportance { feature: SEX, importance: weights[2] },
        ],
        correlations: [
            FeaturePair { a: AGE, b: finding, value: age_finding },
            FeaturePair { a: AGE, b: SEX, value: 0.12 },
            FeaturePair { a: finding, b: SEX, value: finding_sex },
        ],
        rules,
    }
}

static REGISTRY: [FeatureImportanceEntry; 6] = [
    // code, disease finding, [age, finding, sex] weights, r(age, finding), r(finding, sex), rules
    entry(DiseaseCode::D, "糖尿病视网膜病变",     [0.32, 0.28, 0.11], 0.68, 0.15, &rules::DIABETIC_RETINOPATHY),
    entry(DiseaseCode::G, "青光眼",               [0.25, 0.35, 0.05], 0.55, 0.18, &rules::GLAUCOMA),
    entry(DiseaseCode::C, "白内障",               [0.42, 0.28, 0.08], 0.72, 0.14, &rules::CATARACT),
    entry(DiseaseCode::A, "干/湿性老年黄斑病变", [0.38, 0.30, 0.07], 0.65, 0.22, &rules::MACULAR_DEGENERATION),
    entry(DiseaseCode::H, "高血压视网膜病变",     [0.20, 0.35, 0.10], 0.58, 0.20, &rules::HYPERTENSIVE_RETINOPATHY),
    entry(DiseaseCode::M, "病理性近视",           [0.25, 0.32, 0.08], 0.48, 0.15, &rules::PATHOLOGICAL_MYOPIA),
];

/// Every authored entry, in registry order.
pub fn entries() -> &'static [FeatureImportanceEntry] {
    &REGISTRY
}

/// Importance list and correlation table for `code`.
///
/// `N` and `O` have no authored data and fail with `UnknownDiseaseCode`.
pub fn lookup(code: DiseaseCode) -> Result<&'static FeatureImportanceEntry> {
    REGISTRY
        .iter()
        .find(|e| e.code == code)
        .ok_or_else(|| OculyxError::UnknownDiseaseCode(code.to_string()))
}

/// [`lookup`] keyed by the one-letter code as a string.
pub fn lookup_str(code: &str) -> Result<&'static FeatureImportanceEntry> {
    lookup(code.parse()?)
}
