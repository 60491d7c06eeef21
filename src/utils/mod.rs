//! Numeric comparison and input validation helpers

mod errors;
mod numbers;
mod validation;

pub use errors::UtilsError;
pub use numbers::approx_eq;
pub use validation::{validate_target, validate_tolerance, validate_values};

#[cfg(test)]
mod tests;
