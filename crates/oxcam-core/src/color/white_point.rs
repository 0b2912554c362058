//! Reference whites for viewing conditions and RGB workspaces
//!
//! Stored with `Y = 1`; [`WhitePoint::tristimulus`] gives the `Y = 100`
//! values the appearance model expects.

use crate::color::Xyz;

/// A named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    /// XYZ with Y normalized to 1.0
    pub xyz: Xyz,
}

impl WhitePoint {
    const fn unit(name: &'static str, x: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, 1.0, z),
        }
    }

    /// Tristimulus values on the 0..100 scale
    #[inline]
    pub fn tristimulus(&self) -> Xyz {
        self.xyz.scale(100.0)
    }

    /// Look up one of [`STANDARD`] by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        STANDARD
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

/// CIE D50, the ICC profile connection white
pub const D50: WhitePoint = WhitePoint::unit("D50", 0.96422, 0.82521);

/// CIE D65, the sRGB and default viewing white
pub const D65: WhitePoint = WhitePoint::unit("D65", 0.95047, 1.08883);

/// CIE A, tungsten
pub const A: WhitePoint = WhitePoint::unit("A", 1.09850, 0.35585);

/// Equal energy
pub const E: WhitePoint = WhitePoint::unit("E", 1.0, 1.0);

/// Whites accepted by [`WhitePoint::from_name`]
pub const STANDARD: [WhitePoint; 4] = [D50, D65, A, E];
