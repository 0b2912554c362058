//! CAM02 uniform color spaces (CAM02-LCD, CAM02-SCD, CAM02-UCS)
//!
//! Luo, Cui & Li (2006) compress lightness and colorfulness so that Euclidean
//! distance tracks perceived difference. The three spaces share one formula
//! and differ only in `(K_L, c1, c2)`: LCD is fitted to large color
//! differences, SCD to small ones, UCS to both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cam::{Correlate, Correlates};
use crate::math::interpolation::{lerp, wrap};
use crate::{Error, Result};

/// One of the three published coefficient sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UniformSpaceKind {
    /// Large color differences
    Lcd,
    /// Small color differences
    Scd,
    /// General purpose
    #[default]
    Ucs,
}

impl UniformSpaceKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lcd => "LCD",
            Self::Scd => "SCD",
            Self::Ucs => "UCS",
        }
    }
}

impl FromStr for UniformSpaceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LCD" => Ok(Self::Lcd),
            "SCD" => Ok(Self::Scd),
            "UCS" => Ok(Self::Ucs),
            _ => Err(Error::UnknownUniformSpace(s.to_string())),
        }
    }
}

impl fmt::Display for UniformSpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness, colorfulness and hue angle: the input of a uniform space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Jmh {
    pub j: f64,
    pub m: f64,
    /// Degrees
    pub h: f64,
}

impl Jmh {
    pub const fn new(j: f64, m: f64, h: f64) -> Self {
        Self { j, m, h }
    }
}

impl TryFrom<&Correlates> for Jmh {
    type Error = Error;

    fn try_from(c: &Correlates) -> Result<Self> {
        Ok(Self {
            j: c.lightness.ok_or(Error::MissingCorrelate(Correlate::Lightness))?,
            m: c.colorfulness
                .ok_or(Error::MissingCorrelate(Correlate::Colorfulness))?,
            h: c.hue.ok_or(Error::MissingCorrelate(Correlate::Hue))?,
        })
    }
}

impl From<Jmh> for Correlates {
    fn from(jmh: Jmh) -> Self {
        Correlates::jmh(jmh.j, jmh.m, jmh.h)
    }
}

/// A point `J' a' b'` in a uniform space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UcsPoint {
    pub j: f64,
    pub a: f64,
    pub b: f64,
}

impl UcsPoint {
    pub const fn new(j: f64, a: f64, b: f64) -> Self {
        Self { j, a, b }
    }

    /// Straight-line interpolation; the space is Cartesian, so no hue wrap
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            lerp(self.j, other.j, t),
            lerp(self.a, other.a, t),
            lerp(self.b, other.b, t),
        )
    }
}

/// A CAM02 uniform space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSpace {
    kind: Option<UniformSpaceKind>,
    k_l: f64,
    c1: f64,
    c2: f64,
}

impl UniformSpace {
    /// Custom coefficients; `c2` must be non-zero
    pub const fn new(k_l: f64, c1: f64, c2: f64) -> Self {
        Self {
            kind: None,
            k_l,
            c1,
            c2,
        }
    }

    pub const fn from_kind(kind: UniformSpaceKind) -> Self {
        let (k_l, c1, c2) = match kind {
            UniformSpaceKind::Lcd => (0.77, 0.007, 0.0053),
            UniformSpaceKind::Scd => (1.24, 0.007, 0.0363),
            UniformSpaceKind::Ucs => (1.00, 0.007, 0.0228),
        };
        Self {
            kind: Some(kind),
            k_l,
            c1,
            c2,
        }
    }

    /// `"LCD"`, `"SCD"` or `"UCS"`, any case
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map(Self::from_kind)
    }

    /// The named space this was built from, if any
    pub fn kind(&self) -> Option<UniformSpaceKind> {
        self.kind
    }

    /// `(K_L, c1, c2)`
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.k_l, self.c1, self.c2)
    }

    pub fn from_cam(&self, jmh: Jmh) -> UcsPoint {
        let Self { c1, c2, .. } = *self;
        let j = (1.0 + 100.0 * c1) * jmh.j / (1.0 + c1 * jmh.j);
        let m = (c2 * jmh.m).ln_1p() / c2;
        let (sin_h, cos_h) = jmh.h.to_radians().sin_cos();
        UcsPoint::new(j, m * cos_h, m * sin_h)
    }

    pub fn to_cam(&self, point: UcsPoint) -> Jmh {
        let Self { c1, c2, .. } = *self;
        let j = -point.j / (c1 * point.j - 100.0 * c1 - 1.0);
        let m_prime = point.a.hypot(point.b);
        let m = (c2 * m_prime).exp_m1() / c2;
        let h = wrap(point.b.atan2(point.a).to_degrees(), 360.0);
        Jmh::new(j, m, h)
    }

    /// Color difference `ΔE'`
    pub fn distance(&self, p: &UcsPoint, q: &UcsPoint) -> f64 {
        let dj = (p.j - q.j) / self.k_l;
        let da = p.a - q.a;
        let db = p.b - q.b;
        (dj * dj + da * da + db * db).sqrt()
    }
}

impl Default for UniformSpace {
    fn default() -> Self {
        Self::from_kind(UniformSpaceKind::Ucs)
    }
}

impl From<UniformSpaceKind> for UniformSpace {
    fn from(kind: UniformSpaceKind) -> Self {
        Self::from_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolation::cyclic_difference;

    #[test]
    fn test_named_spaces() {
        assert_eq!(
            UniformSpace::from_name("lcd").unwrap().coefficients(),
            (0.77, 0.007, 0.0053)
        );
        assert_eq!(
            UniformSpace::from_name("SCD").unwrap().coefficients(),
            (1.24, 0.007, 0.0363)
        );
        let ucs = UniformSpace::from_name("Ucs").unwrap();
        assert_eq!(ucs.coefficients(), (1.0, 0.007, 0.0228));
        assert_eq!(ucs.kind(), Some(UniformSpaceKind::Ucs));
        assert_eq!(UniformSpace::default(), ucs);
    }

    #[test]
    fn test_unknown_space() {
        assert_eq!(
            UniformSpace::from_name("CAM16"),
            Err(Error::UnknownUniformSpace("CAM16".to_string()))
        );
    }

    #[test]
    fn test_white_and_black() {
        let ucs = UniformSpace::default();
        let white = ucs.from_cam(Jmh::new(100.0, 0.0, 0.0));
        assert!((white.j - 100.0).abs() < 1e-12);
        assert_eq!((white.a, white.b), (0.0, 0.0));
        let black = ucs.from_cam(Jmh::new(0.0, 0.0, 0.0));
        assert_eq!(black.j, 0.0);
    }

    #[test]
    fn test_sand_point() {
        // J, M, h of #e0cda9 under default conditions
        let m = 16.987_820 * 0.584_803_6f64.powf(0.25);
        let p = UniformSpace::default().from_cam(Jmh::new(77.817_273, m, 81.005_276));
        assert!((p.j - 85.6397).abs() < 1e-3);
        assert!((p.a - 2.0003).abs() < 1e-3);
        assert!((p.b - 12.6367).abs() < 1e-3);
    }

    #[test]
    fn test_inverse() {
        for kind in [UniformSpaceKind::Lcd, UniformSpaceKind::Scd, UniformSpaceKind::Ucs] {
            let space = UniformSpace::from_kind(kind);
            for (j, m, h) in [(50.0, 20.0, 10.0), (90.0, 5.0, 350.0), (12.0, 60.0, 181.0)] {
                let back = space.to_cam(space.from_cam(Jmh::new(j, m, h)));
                assert!((back.j - j).abs() < 1e-9, "{kind}");
                assert!((back.m - m).abs() < 1e-9, "{kind}");
                assert!(cyclic_difference(back.h, h, 360.0) < 1e-9, "{kind}");
            }
        }
    }

    #[test]
    fn test_distance_weights_lightness() {
        let lcd = UniformSpace::from_kind(UniformSpaceKind::Lcd);
        let p = UcsPoint::new(50.0, 0.0, 0.0);
        let q = UcsPoint::new(50.77, 0.0, 0.0);
        assert!((lcd.distance(&p, &q) - 1.0).abs() < 1e-12);

        let ucs = UniformSpace::default();
        let r = UcsPoint::new(50.0, 3.0, 4.0);
        assert!((ucs.distance(&p, &r) - 5.0).abs() < 1e-12);
        assert_eq!(ucs.distance(&r, &r), 0.0);
    }

    #[test]
    fn test_jmh_from_correlates() {
        let c = Correlates::jmh(40.0, 12.0, 200.0);
        assert_eq!(Jmh::try_from(&c).unwrap(), Jmh::new(40.0, 12.0, 200.0));
        assert_eq!(
            Jmh::try_from(&Correlates::jch(40.0, 12.0, 200.0)),
            Err(Error::MissingCorrelate(Correlate::Colorfulness))
        );
        assert_eq!(Correlates::from(Jmh::new(1.0, 2.0, 3.0)), Correlates::jmh(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_point_lerp() {
        let p = UcsPoint::new(0.0, 10.0, -10.0);
        let q = UcsPoint::new(100.0, -10.0, 10.0);
        assert_eq!(p.lerp(&q, 0.5), UcsPoint::new(50.0, 0.0, 0.0));
        assert_eq!(p.lerp(&q, 0.0), p);
    }
}
