//! CAT02 chromatic adaptation and Hunt-Pointer-Estevez cone space
//!
//! CIECAM02 adapts in the sharpened CAT02 space and then moves to HPE cone
//! fundamentals for the nonlinear compression. The adaptation itself is a
//! von Kries style per-channel gain, blended with identity by the degree of
//! adaptation `D`.
//!
//! References:
//! - CIE 159:2004
//! - Luo & Li, "CIECAM02 and Its Recent Developments"

use crate::color::Xyz;
use crate::math::Matrix3x3;

/// CAT02: XYZ → sharpened RGB
pub const CAT02_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Hunt-Pointer-Estevez: XYZ → cone fundamentals
pub const HPE_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

/// Degree of adaptation `D`
///
/// Full adaptation when the illuminant is discounted, otherwise damped by
/// the adapting luminance `l_a` (cd/m²) and scaled by the surround factor `f`.
#[inline]
pub fn degree_of_adaptation(f: f64, l_a: f64, discounting: bool) -> f64 {
    if discounting {
        1.0
    } else {
        f * (1.0 - (1.0 / 3.6) * (-(l_a + 42.0) / 92.0).exp())
    }
}

/// Per-channel CAT02 gains `D·Y_w/RGB_w + 1 - D`
///
/// Channels where the white has no response keep a unit gain.
pub fn adaptation_gains(white: Xyz, d: f64) -> [f64; 3] {
    let rgb_w = CAT02_XYZ_TO_LMS.multiply_vec(white.to_array());
    rgb_w.map(|v| {
        if v.abs() > 1e-12 {
            d * white.y / v + 1.0 - d
        } else {
            1.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::{A, D65};

    #[test]
    fn test_discounting_is_full_adaptation() {
        assert_eq!(degree_of_adaptation(0.9, 40.0, true), 1.0);
    }

    #[test]
    fn test_degree_of_adaptation_range() {
        // Average surround, 40 cd/m²
        let d = degree_of_adaptation(1.0, 40.0, false);
        assert!((d - 0.886_077_6).abs() < 1e-6);

        // Brighter adapting field adapts more
        assert!(degree_of_adaptation(1.0, 1000.0, false) > d);
        assert!(degree_of_adaptation(1.0, 1000.0, false) <= 1.0);
    }

    #[test]
    fn test_full_adaptation_equalizes_white() {
        // With D = 1 every white channel maps to Y_w
        let white = D65.xyz.scale(100.0);
        let gains = adaptation_gains(white, 1.0);
        let rgb_w = CAT02_XYZ_TO_LMS.multiply_vec(white.to_array());
        for c in 0..3 {
            assert!((gains[c] * rgb_w[c] - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_adaptation_is_unit_gain() {
        let gains = adaptation_gains(A.xyz.scale(100.0), 0.0);
        assert_eq!(gains, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_matrices_invertible() {
        assert!(CAT02_XYZ_TO_LMS.inverse().is_some());
        assert!(HPE_XYZ_TO_LMS.inverse().is_some());
    }
}
