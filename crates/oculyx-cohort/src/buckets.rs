//! Fixed-width age buckets.
//!
//! Five 20-year buckets starting at 0. The last bucket runs from 80 up to the
//! oldest age observed in the cohort, so every valid record falls in exactly
//! one bucket. When nobody is 80 or older the last bucket is empty.

use serde::{Deserialize, Serialize};

pub const BUCKET_COUNT: u32 = 5;
pub const BUCKET_WIDTH: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub label: String,
    /// Inclusive.
    pub lower_bound: u32,
    /// Inclusive.
    pub upper_bound: u32,
    pub count: usize,
}

impl AgeBucket {
    pub fn contains(&self, age: u32) -> bool {
        self.lower_bound <= age && age <= self.upper_bound
    }
}

/// Empty buckets for a cohort whose oldest member is `age_max`.
pub fn empty_buckets(age_max: u32) -> Vec<AgeBucket> {
    (0..BUCKET_COUNT)
        .map(|i| {
            let lower = i * BUCKET_WIDTH;
            let last = i + 1 == BUCKET_COUNT;
            let (label, upper) = if last {
                (format!("{lower}+"), age_max)
            } else {
                (format!("{}-{}", lower, lower + BUCKET_WIDTH - 1), lower + BUCKET_WIDTH - 1)
            };
            AgeBucket { label, lower_bound: lower, upper_bound: upper, count: 0 }
        })
        .collect()
}

/// Index of the first bucket containing `age`, scanning in ascending order.
pub fn bucket_index(buckets: &[AgeBucket], age: u32) -> Option<usize> {
    buckets.iter().position(|b| b.contains(age))
}
