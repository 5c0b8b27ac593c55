//! Cohort summary statistics over ingested patient records.
//!
//! Pure, synchronous and deterministic: the summary is recomputed from the
//! record set on every call and nothing is cached.

pub mod aggregator;
pub mod buckets;

pub use aggregator::{aggregate, Aggregate, CohortSummary, SexCounts};
pub use buckets::AgeBucket;
