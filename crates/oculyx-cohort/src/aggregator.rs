//! Cohort aggregation.
//!
//! Steps, over the valid records only (age, sex and at least one flag):
//!   1. Sex tally, both sexes always present
//!   2. Age buckets (see `buckets`)
//!   3. Per-code diagnosis counts, every code always present
//!   4. Sample size and rounded mean age
//!
//! An empty valid set yields `Aggregate::InsufficientData` rather than a
//! summary with a meaningless mean.

use oculyx_common::{DiseaseCode, OculyxError, Record, Result, Sex};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::buckets::{bucket_index, empty_buckets, AgeBucket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SexCounts {
    pub male: usize,
    pub female: usize,
}

impl SexCounts {
    fn add(&mut self, sex: Sex) {
        match sex {
            Sex::Male => self.male += 1,
            Sex::Female => self.female += 1,
        }
    }

    pub fn get(&self, sex: Sex) -> usize {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

/// Aggregate statistics over the valid records of one ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub sample_size: usize,
    /// Arithmetic mean of ages, rounded half up.
    pub mean_age: u32,
    pub age_min: u32,
    pub age_max: u32,
    pub sex_counts: SexCounts,
    pub age_buckets: Vec<AgeBucket>,
    pub diagnosis_counts: BTreeMap<DiseaseCode, usize>,
    /// Input records dropped by the validity filter.
    pub excluded: usize,
}

impl CohortSummary {
    pub fn diagnosis_count(&self, code: DiseaseCode) -> usize {
        self.diagnosis_counts.get(&code).copied().unwrap_or(0)
    }

    /// Share of the sample carrying each diagnosis. Codes are independent, so
    /// the shares may sum to more than 1.
    pub fn diagnosis_rates(&self) -> BTreeMap<DiseaseCode, f64> {
        self.diagnosis_counts
            .iter()
            .map(|(code, &count)| (*code, count as f64 / self.sample_size as f64))
            .collect()
    }

    pub fn bucket(&self, label: &str) -> Option<&AgeBucket> {
        self.age_buckets.iter().find(|b| b.label == label)
    }
}

/// Result of aggregating a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Aggregate {
    Summary(CohortSummary),
    /// No record survived the validity filter; no statistics are defined.
    InsufficientData { excluded: usize },
}

impl Aggregate {
    pub fn summary(&self) -> Option<&CohortSummary> {
        match self {
            Aggregate::Summary(s) => Some(s),
            Aggregate::InsufficientData { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Aggregate::InsufficientData { .. })
    }

    /// Convert to a `Result` for callers that treat missing data as an error.
    pub fn into_summary(self) -> Result<CohortSummary> {
        match self {
            Aggregate::Summary(s) => Ok(s),
            Aggregate::InsufficientData { excluded } => Err(OculyxError::InsufficientData { excluded }),
        }
    }
}

/// A valid record with its required fields unwrapped.
struct Valid<'a> {
    age: u32,
    sex: Sex,
    record: &'a Record,
}

fn as_valid(record: &Record) -> Option<Valid<'_>> {
    if !record.diagnosis.any() {
        return None;
    }
    Some(Valid {
        age: record.age?,
        sex: record.sex?,
        record,
    })
}

/// Round `sum / n` half up, in integer arithmetic.
fn mean_half_up(sum: u64, n: u64) -> u64 {
    (2 * sum + n) / (2 * n)
}

/// Compute the cohort summary of `records`. The input is not modified.
pub fn aggregate(records: &[Record]) -> Aggregate {
    let valid: Vec<Valid<'_>> = records.iter().filter_map(as_valid).collect();
    let excluded = records.len() - valid.len();

    let (Some(age_min), Some(age_max)) = (
        valid.iter().map(|v| v.age).min(),
        valid.iter().map(|v| v.age).max(),
    ) else {
        debug!(excluded, "No valid records to aggregate");
        return Aggregate::InsufficientData { excluded };
    };

    let mut sex_counts = SexCounts::default();
    let mut age_buckets = empty_buckets(age_max);
    let mut diagnosis_counts: BTreeMap<DiseaseCode, usize> =
        DiseaseCode::ALL.into_iter().map(|c| (c, 0)).collect();
    let mut age_sum: u64 = 0;

    for v in &valid {
        sex_counts.add(v.sex);
        age_sum += u64::from(v.age);

        // The last bucket ends at age_max, so some bucket always matches.
        if let Some(i) = bucket_index(&age_buckets, v.age) {
            age_buckets[i].count += 1;
        }

        for code in v.record.diagnosis.iter_set() {
            *diagnosis_counts.entry(code).or_default() += 1;
        }
    }

    let sample_size = valid.len();
    let mean_age = mean_half_up(age_sum, sample_size as u64) as u32;

    debug!(sample_size, excluded, mean_age, "Aggregated cohort");

    Aggregate::Summary(CohortSummary {
        sample_size,
        mean_age,
        age_min,
        age_max,
        sex_counts,
        age_buckets,
        diagnosis_counts,
        excluded,
    })
}
