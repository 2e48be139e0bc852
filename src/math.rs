#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Floored modulo: the result takes the sign of `m`.
///
/// `-7 % 3` is `-1` in Rust; this returns `2`, which is what every angle wrap in
/// the pipeline needs. Values already in range come back bit-for-bit.
///
/// # Examples
///
/// ```
/// # fn floored_mod(x: f64, m: f64) -> f64 { let r = x % m; if r < 0.0 { r + m } else { r } }
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(361.0, 360.0), 1.0);
/// ```
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    let remainder = x % m;
    if remainder < 0.0 {
        remainder + m
    } else {
        remainder
    }
}

/// Wraps an angle in degrees into [0, 360).
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let wrapped = floored_mod(degrees, 360.0);
    // -1e-17 + 360.0 rounds to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into [-180, 180).
pub(crate) fn normalize_degrees_180(degrees: f64) -> f64 {
    if (-180.0..180.0).contains(&degrees) {
        degrees
    } else {
        normalize_degrees_360(degrees + 180.0) - 180.0
    }
}

/// Evaluates `c[0] + c[1] x + c[2] x² + ...` by Horner's method.
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };
    rest.iter().rev().fold(last, |acc, &coeff| acc.mul_add(x, coeff))
}
