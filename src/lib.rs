//! Twentyfour - find every arithmetic expression over a set of numbers that hits a target
//!
//! The search repeatedly picks two of the remaining values, combines them with
//! `+`, `-`, `*` or `/`, and recurses until one value is left. Every fully
//! reduced value within tolerance of the target is reported as a fully
//! parenthesized expression.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use solver::{ExpressionSolver, SearchStats, Solutions, SolverConfig};
pub use utils::{UtilsError, approx_eq};

/// Every expression over `values` that evaluates to `target` within `1e-6`
///
/// Results come in depth-first discovery order and are not deduplicated.
/// Empty input yields no results; division by zero is skipped, never reported.
///
/// # Examples
///
/// ```
/// let found = twentyfour::search(&[6.0, 4.0, 3.0, 1.0], 24.0);
/// assert_eq!(found, vec!["(6 / (1 - (3 / 4)))"]);
/// ```
pub fn search(values: &[f64], target: f64) -> Vec<String> {
    ExpressionSolver::default()
        .solve(values, target)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_strings() {
        assert_eq!(search(&[1.0, 2.0], 3.0), vec!["(1 + 2)"]);
    }

    #[test]
    fn test_search_boundaries() {
        assert!(search(&[], 24.0).is_empty());
        assert_eq!(search(&[24.0], 24.0), vec!["24"]);
        assert!(search(&[3.0], 24.0).is_empty());
    }

    #[test]
    fn test_search_eight_eight_three_three() {
        let found = search(&[8.0, 8.0, 3.0, 3.0], 24.0);
        assert!(!found.is_empty());
        for text in &found {
            let value = Expression::parse(text).and_then(|e| e.evaluate());
            assert!(value.is_ok_and(|v| (v - 24.0).abs() <= 1e-6), "{}", text);
        }
    }
}
