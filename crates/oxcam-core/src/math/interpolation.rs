//! Linear and cyclic interpolation
//!
//! Hue angle (period 360) and hue quadrature (period 400) live on a circle;
//! interpolating them naively takes the long way round. The cyclic variants
//! always follow the shorter arc.

/// Linear interpolation, `a` at `t = 0`, `b` at `t = 1`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Interpolation along the shorter arc of a circle of length `period`
///
/// Inputs are expected in `[0, period)`; the result is in the same range.
pub fn cyclic_lerp(mut a: f64, mut b: f64, t: f64, period: f64) -> f64 {
    if (a - b).abs() > period / 2.0 {
        if a > b {
            b += period;
        } else {
            a += period;
        }
    }
    wrap(lerp(a, b, t), period)
}

/// Length of the shorter arc between `a` and `b`
#[inline]
pub fn cyclic_difference(a: f64, b: f64, period: f64) -> f64 {
    let d = (a - b).rem_euclid(period);
    d.min(period - d)
}

/// Wrap a value into `[0, period)`
///
/// `rem_euclid` can round up to exactly `period` for tiny negative inputs;
/// that case folds back to zero.
#[inline]
pub fn wrap(value: f64, period: f64) -> f64 {
    let w = value.rem_euclid(period);
    if w >= period { 0.0 } else { w }
}
