use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any value is NaN or infinite.
pub fn validate_values(values: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating values: {:?}", values);

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        warn!("Rejecting non-finite value #{}: {}", index, value);
        return Err(UtilsError::NonFiniteValue { index, value });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the target is NaN or infinite.
pub fn validate_target(target: f64) -> Result<(), UtilsError> {
    if !target.is_finite() {
        warn!("Rejecting non-finite target: {}", target);
        return Err(UtilsError::NonFiniteTarget(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the tolerance is negative, NaN or infinite.
pub fn validate_tolerance(tolerance: f64) -> Result<(), UtilsError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        warn!("Rejecting tolerance: {}", tolerance);
        return Err(UtilsError::InvalidTolerance(tolerance));
    }
    Ok(())
}
