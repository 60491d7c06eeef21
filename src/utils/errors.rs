use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Value #{index} is not a finite number: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("Target is not a finite number: {0}")]
    NonFiniteTarget(f64),
    #[error("Tolerance must be a finite, non-negative number: {0}")]
    InvalidTolerance(f64),
}
