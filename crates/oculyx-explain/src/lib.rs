//! Fixed per-disease feature importance and correlation tables,
//! used to narrate model explainability.
//!
//! All values are authored constants; nothing here is computed from data.

pub mod registry;
pub mod correlation;
pub mod rules;

pub use correlation::{CorrelationCell, FeaturePair};
pub use rules::DecisionRule;
pub use registry::{entries, lookup, lookup_str, FeatureImportance, FeatureImportanceEntry};
