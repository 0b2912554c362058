//! 3x3 matrices for cone-space and RGB workspace transforms
//!
//! Everything is f64; the appearance model round-trips to ~1e-12 and the
//! matrices must not be the limiting factor.

/// A row-major 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Elements, `m[row][col]`
    pub m: [[f64; 3]; 3],
}

#[inline]
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// `M · v`, e.g. tristimulus values into cone responses
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot(&row, &v))
    }

    /// `self · rhs`: apply `rhs` first, then `self`
    pub fn multiply(&self, rhs: &Self) -> Self {
        let col = |c: usize| [rhs.m[0][c], rhs.m[1][c], rhs.m[2][c]];
        let cols = [col(0), col(1), col(2)];
        Self::new(self.m.map(|row| cols.map(|c| dot(&row, &c))))
    }

    /// Inverse, or `None` when the rows are (numerically) linearly dependent
    ///
    /// The columns of the inverse are the pairwise cross products of the
    /// rows, scaled by the triple product.
    pub fn inverse(&self) -> Option<Self> {
        let [r0, r1, r2] = &self.m;
        let c0 = cross(r1, r2);
        let c1 = cross(r2, r0);
        let c2 = cross(r0, r1);
        let det = dot(r0, &c0);
        if !det.is_finite() || det.abs() < 1e-14 {
            return None;
        }
        let s = det.recip();
        Some(Self::new([
            [c0[0] * s, c1[0] * s, c2[0] * s],
            [c0[1] * s, c1[1] * s, c2[1] * s],
            [c0[2] * s, c1[2] * s, c2[2] * s],
        ]))
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Linear RGB → XYZ with Y_white = 1, D65

/// sRGB / Rec.709 primaries, IEC 61966-2-1
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// Display P3 primaries
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4865709, 0.2656677, 0.1982173],
    [0.2289746, 0.6917385, 0.0792869],
    [0.0000000, 0.0451134, 1.0439444],
]);

/// Adobe RGB (1998) primaries
pub const ADOBE_RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.5767309, 0.1855540, 0.1881852],
    [0.2973769, 0.6273491, 0.0752741],
    [0.0270343, 0.0706872, 0.9911085],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{CAT02_XYZ_TO_LMS, HPE_XYZ_TO_LMS};

    fn max_abs_diff(a: &Matrix3x3, b: &Matrix3x3) -> f64 {
        a.m.iter()
            .flatten()
            .zip(b.m.iter().flatten())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_identity_leaves_cones_alone() {
        let lms = [94.9, 103.5, 108.7];
        assert_eq!(Matrix3x3::IDENTITY.multiply_vec(lms), lms);
        assert_eq!(Matrix3x3::default(), Matrix3x3::IDENTITY);
    }

    #[test]
    fn test_multiply_applies_right_first() {
        let swap_rg = Matrix3x3::new([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let double_r = Matrix3x3::new([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = [1.0, 5.0, 7.0];
        assert_eq!(swap_rg.multiply(&double_r).multiply_vec(v), [5.0, 2.0, 7.0]);
        assert_eq!(double_r.multiply(&swap_rg).multiply_vec(v), [10.0, 1.0, 7.0]);
    }

    #[test]
    fn test_cat02_inverse() {
        let inv = CAT02_XYZ_TO_LMS.inverse().unwrap();
        assert!(max_abs_diff(&CAT02_XYZ_TO_LMS.multiply(&inv), &Matrix3x3::IDENTITY) < 1e-12);
        assert!(max_abs_diff(&inv.multiply(&CAT02_XYZ_TO_LMS), &Matrix3x3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_cat02_to_hpe_keeps_equal_energy() {
        // Both spaces are normalized so that illuminant E gives equal responses
        let cat02_to_hpe = HPE_XYZ_TO_LMS.multiply(&CAT02_XYZ_TO_LMS.inverse().unwrap());
        let out = cat02_to_hpe.multiply_vec([1.0, 1.0, 1.0]);
        for v in out {
            assert!((v - 1.0).abs() < 1e-3, "{out:?}");
        }
    }

    #[test]
    fn test_dependent_rows_have_no_inverse() {
        // Third row is the sum of the first two
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.inverse().is_none());
        let nan = Matrix3x3::new([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(nan.inverse().is_none());
    }

    #[test]
    fn test_srgb_white() {
        // RGB (1,1,1) lands on D65
        let white = SRGB_TO_XYZ.multiply_vec([1.0, 1.0, 1.0]);
        assert!((white[0] - 0.95047).abs() < 1e-4);
        assert!((white[1] - 1.0).abs() < 1e-4);
        assert!((white[2] - 1.08883).abs() < 1e-4);
    }

    #[test]
    fn test_workspace_matrices_invertible() {
        for m in [SRGB_TO_XYZ, DISPLAY_P3_TO_XYZ, ADOBE_RGB_TO_XYZ] {
            let inv = m.inverse().unwrap();
            assert!(max_abs_diff(&m.multiply(&inv), &Matrix3x3::IDENTITY) < 1e-12);
        }
    }
}
