//! Tristimulus ↔ device RGB conversion
//!
//! The gamut finder only needs the [`XyzRgbConverter`] seam. [`RgbWorkspace`]
//! is the stock implementation: a transfer function plus a primaries matrix,
//! scaled so that RGB white lands on the workspace white at `Y = 100`.

use crate::color::white_point::{self, WhitePoint};
use crate::color::{Rgb, Xyz};
use crate::math::gamma::{adobe_gamma_decode, adobe_gamma_encode};
use crate::math::matrix::{ADOBE_RGB_TO_XYZ, DISPLAY_P3_TO_XYZ, SRGB_TO_XYZ};
use crate::math::{Matrix3x3, srgb_gamma_decode, srgb_gamma_encode};
use crate::{Error, Result};

/// Conversion between XYZ (0..100) and gamma-encoded device RGB (0..1)
pub trait XyzRgbConverter {
    fn from_rgb(&self, rgb: Rgb) -> Xyz;
    fn to_rgb(&self, xyz: Xyz) -> Rgb;
}

impl<T: XyzRgbConverter + ?Sized> XyzRgbConverter for &T {
    fn from_rgb(&self, rgb: Rgb) -> Xyz {
        (**self).from_rgb(rgb)
    }

    fn to_rgb(&self, xyz: Xyz) -> Rgb {
        (**self).to_rgb(xyz)
    }
}

/// Encoding applied between linear light and device values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferFunction {
    Linear,
    Srgb,
    /// Pure 2.2 (563/256) power of Adobe RGB (1998)
    Adobe,
}

impl TransferFunction {
    #[inline]
    fn decode(self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            Self::Srgb => srgb_gamma_decode(v),
            Self::Adobe => adobe_gamma_decode(v),
        }
    }

    #[inline]
    fn encode(self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            Self::Srgb => srgb_gamma_encode(v),
            Self::Adobe => adobe_gamma_encode(v),
        }
    }
}

/// An RGB working space: primaries, white and transfer function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbWorkspace {
    rgb_to_xyz: Matrix3x3,
    xyz_to_rgb: Matrix3x3,
    white: WhitePoint,
    transfer: TransferFunction,
}

impl RgbWorkspace {
    /// Build a workspace from a linear RGB → XYZ (`Y_white = 1`) matrix
    pub fn new(
        rgb_to_xyz: Matrix3x3,
        white: WhitePoint,
        transfer: TransferFunction,
    ) -> Result<Self> {
        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or(Error::SingularMatrix("RGB workspace primaries"))?;
        Ok(Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white,
            transfer,
        })
    }

    fn builtin(rgb_to_xyz: Matrix3x3, transfer: TransferFunction) -> Self {
        // The built-in matrices are non-singular; the identity fallback is never taken.
        let xyz_to_rgb = rgb_to_xyz.inverse().unwrap_or_default();
        Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white: white_point::D65,
            transfer,
        }
    }

    /// sRGB, D65
    pub fn srgb() -> Self {
        Self::builtin(SRGB_TO_XYZ, TransferFunction::Srgb)
    }

    /// Display P3, D65 with the sRGB transfer function
    pub fn display_p3() -> Self {
        Self::builtin(DISPLAY_P3_TO_XYZ, TransferFunction::Srgb)
    }

    /// Adobe RGB (1998), D65
    pub fn adobe_rgb() -> Self {
        Self::builtin(ADOBE_RGB_TO_XYZ, TransferFunction::Adobe)
    }

    /// The workspace white, `Y = 100`
    pub fn white(&self) -> Xyz {
        Xyz::from_array(self.rgb_to_xyz.multiply_vec([1.0, 1.0, 1.0])).scale(100.0)
    }

    pub fn white_point(&self) -> WhitePoint {
        self.white
    }
}

impl XyzRgbConverter for RgbWorkspace {
    fn from_rgb(&self, rgb: Rgb) -> Xyz {
        let linear = rgb.map(|v| self.transfer.decode(v)).to_array();
        Xyz::from_array(self.rgb_to_xyz.multiply_vec(linear)).scale(100.0)
    }

    fn to_rgb(&self, xyz: Xyz) -> Rgb {
        let linear = self.xyz_to_rgb.multiply_vec(xyz.scale(0.01).to_array());
        Rgb::from_array(linear).map(|v| self.transfer.encode(v))
    }
}

impl Default for RgbWorkspace {
    fn default() -> Self {
        Self::srgb()
    }
}
