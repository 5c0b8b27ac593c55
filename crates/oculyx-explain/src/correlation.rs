//! Pairwise feature correlations.

use serde::Serialize;

/// An authored correlation between two distinct features. Order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeaturePair {
    pub a: &'static str,
    pub b: &'static str,
    pub value: f64,
}

impl FeaturePair {
    pub fn matches(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// One cell of the correlation grid, as a heatmap consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationCell {
    pub row: &'static str,
    pub column: &'static str,
    pub value: f64,
}

/// Symmetric lookup over `pairs`. A feature with itself is 1; pairs that were
/// never authored are 0.
pub fn correlation_of(pairs: &[FeaturePair], x: &str, y: &str) -> f64 {
    if x == y {
        return 1.0;
    }
    pairs
        .iter()
        .find(|p| p.matches(x, y))
        .map(|p| p.value)
        .unwrap_or(0.0)
}

/// Full `n × n` grid over `features`, row-major in the given order.
pub fn grid(features: &[&'static str], pairs: &[FeaturePair]) -> Vec<CorrelationCell> {
    features
        .iter()
        .flat_map(|&row| {
            features.iter().map(move |&column| CorrelationCell {
                row,
                column,
                value: correlation_of(pairs, row, column),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [FeaturePair; 1] = [FeaturePair { a: "x", b: "y", value: 0.4 }];

    #[test]
    fn test_lookup_is_order_independent() {
        assert_eq!(correlation_of(&PAIRS, "x", "y"), 0.4);
        assert_eq!(correlation_of(&PAIRS, "y", "x"), 0.4);
    }

    #[test]
    fn test_diagonal_and_unauthored() {
        assert_eq!(correlation_of(&PAIRS, "x", "x"), 1.0);
        assert_eq!(correlation_of(&PAIRS, "x", "z"), 0.0);
    }

    #[test]
    fn test_grid_is_row_major() {
        let cells = grid(&["x", "y"], &PAIRS);
        let flat: Vec<_> = cells.iter().map(|c| (c.row, c.column, c.value)).collect();
        assert_eq!(
            flat,
            vec![("x", "x", 1.0), ("x", "y", 0.4), ("y", "x", 0.4), ("y", "y", 1.0)]
        );
    }
}
