//! Plain structured output handed to the presentation layer.

use oculyx_cohort::Aggregate;
use oculyx_common::{DiseaseCode, DiseaseInfo};
use oculyx_explain::{CorrelationCell, DecisionRule, FeatureImportance, FeatureImportanceEntry};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub sheet: String,
    pub rows_read: usize,
    pub cohort: Aggregate,
    pub catalogue: Vec<&'static DiseaseInfo>,
    pub explain: ExplainView,
}

/// Explainability section for the selected disease.
#[derive(Debug, Serialize)]
pub struct ExplainView {
    pub disease: &'static DiseaseInfo,
    /// Sorted by descending importance, as charted.
    pub ranked: Vec<FeatureImportance>,
    pub correlation_matrix: Vec<CorrelationCell>,
    pub rules: &'static [DecisionRule],
}

impl ExplainView {
    pub fn new(entry: &'static FeatureImportanceEntry) -> Self {
        Self {
            disease: entry.code.info(),
            ranked: entry.ranked(),
            correlation_matrix: entry.correlation_matrix(),
            rules: entry.rules,
        }
    }
}

pub fn catalogue() -> Vec<&'static DiseaseInfo> {
    DiseaseCode::ALL.iter().map(DiseaseCode::info).collect()
}
