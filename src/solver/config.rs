use crate::solver::constants::{DEFAULT_RELATIVE_TOLERANCE, DEFAULT_TOLERANCE};
use crate::utils::approx_eq;

/// Configuration for target matching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance when comparing a reduced value to the target
    pub tolerance: f64,
    /// Relative tolerance, scaled by the larger magnitude; zero disables it
    pub relative_tolerance: f64,
}

impl SolverConfig {
    pub fn matches(&self, value: f64, target: f64) -> bool {
        approx_eq(value, target, self.tolerance, self.relative_tolerance)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}
