use crate::utils::{
    UtilsError, approx_eq, validate_target, validate_tolerance, validate_values,
};

#[test]
fn test_approx_eq_absolute() {
    assert!(approx_eq(24.0, 24.0, 1e-6, 0.0));
    assert!(approx_eq(24.000_000_5, 24.0, 1e-6, 0.0));
    assert!(approx_eq(23.999_999_5, 24.0, 1e-6, 0.0));
    assert!(!approx_eq(24.000_01, 24.0, 1e-6, 0.0));
}

#[test]
fn test_approx_eq_relative_widens_for_large_values() {
    let big = 1e9;
    assert!(!approx_eq(big + 0.5, big, 1e-6, 0.0));
    assert!(approx_eq(big + 0.5, big, 1e-6, 1e-9));
}

#[test]
fn test_approx_eq_infinities_and_nan() {
    assert!(approx_eq(f64::INFINITY, f64::INFINITY, 1e-6, 0.0));
    assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, 1e-6, 0.0));
    assert!(!approx_eq(f64::NAN, f64::NAN, 1e-6, 0.0));
}

#[test]
fn test_validate_values() {
    assert!(validate_values(&[6.0, 4.0, 3.0, 1.0]).is_ok());
    assert!(validate_values(&[]).is_ok());
    assert!(validate_values(&[0.0, -2.5]).is_ok());

    let result = validate_values(&[1.0, f64::INFINITY]);
    assert_eq!(
        result,
        Err(UtilsError::NonFiniteValue {
            index: 1,
            value: f64::INFINITY
        })
    );

    assert!(validate_values(&[f64::NAN]).is_err());
}

#[test]
fn test_validate_target() {
    assert!(validate_target(24.0).is_ok());
    assert!(validate_target(-0.5).is_ok());
    assert!(validate_target(f64::NAN).is_err());
    assert_eq!(
        validate_target(f64::NEG_INFINITY),
        Err(UtilsError::NonFiniteTarget(f64::NEG_INFINITY))
    );
}

#[test]
fn test_validate_tolerance() {
    assert!(validate_tolerance(1e-6).is_ok());
    assert!(validate_tolerance(0.0).is_ok());
    assert_eq!(
        validate_tolerance(-1.0),
        Err(UtilsError::InvalidTolerance(-1.0))
    );
    assert!(validate_tolerance(f64::INFINITY).is_err());
}
