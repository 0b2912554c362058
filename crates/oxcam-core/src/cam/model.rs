//! CIECAM02 appearance model
//!
//! [`AppearanceModel`] derives its constants from a set of
//! [`ViewingConditions`] once, at construction, and is immutable afterwards.
//! Forward and inverse transforms are pure functions of those constants, so a
//! model can be shared freely between threads.
//!
//! Forward path: XYZ → CAT02 → per-channel adaptation gains → HPE cone space
//! → post-adaptation compression → opponent axes → correlates.
//! The inverse runs the same chain backwards starting from J, C and h.
//!
//! References:
//! - CIE 159:2004, "A colour appearance model for colour management systems"
//! - Fairchild, "Color Appearance Models", 3rd ed., ch. 16

use tracing::debug;

use crate::cam::correlates::{Correlate, CorrelateSet, Correlates, FullCorrelates};
use crate::cam::hue_quadrature::{hue_to_quadrature, quadrature_to_hue};
use crate::cam::viewing::{SurroundConstants, ViewingConditions};
use crate::color::Xyz;
use crate::math::interpolation::wrap;
use crate::math::{
    CAT02_XYZ_TO_LMS, HPE_XYZ_TO_LMS, Matrix3x3, adaptation_gains, degree_of_adaptation,
};
use crate::{Error, Result};

/// Constants derived from the viewing conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    pub surround: SurroundConstants,
    /// `1 / (5 L_A + 1)`
    pub k: f64,
    /// Luminance-level adaptation factor `F_L`
    pub f_l: f64,
    /// Background ratio `Y_b / Y_w`
    pub n: f64,
    /// Background induction factor
    pub n_bb: f64,
    /// Chromatic induction factor, equal to `n_bb`
    pub n_cb: f64,
    /// Base exponent of the lightness nonlinearity
    pub z: f64,
    /// Degree of adaptation
    pub d: f64,
    /// Per-channel CAT02 adaptation gains
    pub d_rgb: [f64; 3],
    /// Achromatic response of the adapted white
    pub a_w: f64,
}

impl DerivedConstants {
    #[inline]
    fn f_l_root(&self) -> f64 {
        self.f_l.powf(0.25)
    }

    /// Brightness `Q` from lightness `J`
    pub fn brightness(&self, lightness: f64) -> f64 {
        4.0 / self.surround.c * (lightness / 100.0).sqrt() * (self.a_w + 4.0) * self.f_l_root()
    }

    /// Lightness `J` from brightness `Q`
    pub fn lightness(&self, brightness: f64) -> f64 {
        6.25 * (self.surround.c * brightness / ((self.a_w + 4.0) * self.f_l_root())).powi(2)
    }

    /// Colorfulness `M` from chroma `C`
    pub fn colorfulness(&self, chroma: f64) -> f64 {
        chroma * self.f_l_root()
    }

    /// Chroma `C` from colorfulness `M`
    pub fn chroma_from_colorfulness(&self, colorfulness: f64) -> f64 {
        colorfulness / self.f_l_root()
    }

    /// Chroma `C` from saturation `s` and brightness `Q`
    pub fn chroma_from_saturation_brightness(&self, saturation: f64, brightness: f64) -> f64 {
        (saturation / 100.0).powi(2) * brightness / self.f_l_root()
    }

    /// Saturation `s` from colorfulness `M` and brightness `Q`
    ///
    /// Zero brightness has zero saturation.
    pub fn saturation(&self, colorfulness: f64, brightness: f64) -> f64 {
        if brightness > 0.0 {
            100.0 * (colorfulness / brightness).sqrt()
        } else {
            0.0
        }
    }

    /// `(1.64 - 0.29^n)^0.73`, the background term of chroma
    #[inline]
    fn chroma_background(&self) -> f64 {
        (1.64 - 0.29f64.powf(self.n)).powf(0.73)
    }

    /// `50000/13 · N_c · N_cb`
    #[inline]
    fn chroma_scale(&self) -> f64 {
        5e4 / 13.0 * self.surround.n_c * self.n_cb
    }

    #[inline]
    fn achromatic_response(&self, [r, g, b]: [f64; 3]) -> f64 {
        (2.0 * r + g + b / 20.0 - 0.305) * self.n_bb
    }
}

/// Post-adaptation nonlinear compression of one cone response
#[inline]
fn compress(v: f64, f_l: f64) -> f64 {
    let x = (f_l * v.abs() / 100.0).powf(0.42);
    v.signum() * 400.0 * x / (27.13 + x) + 0.1
}

/// Inverse of [`compress`]
#[inline]
fn decompress(v: f64, f_l: f64) -> f64 {
    let x = v - 0.1;
    let ax = x.abs();
    x.signum() * 100.0 / f_l * (27.13 * ax / (400.0 - ax)).powf(1.0 / 0.42)
}

/// Eccentricity factor `e_t` of a hue angle in radians
#[inline]
fn eccentricity(h_rad: f64) -> f64 {
    0.25 * ((h_rad + 2.0).cos() + 3.8)
}

/// A CIECAM02 model bound to one set of viewing conditions
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceModel {
    conditions: ViewingConditions,
    correlates: CorrelateSet,
    constants: DerivedConstants,
    cat02_inverse: Matrix3x3,
    cat02_to_hpe: Matrix3x3,
    hpe_to_cat02: Matrix3x3,
}

impl AppearanceModel {
    /// Build a model that reports `correlates` from [`AppearanceModel::from_xyz`]
    pub fn new(conditions: ViewingConditions, correlates: CorrelateSet) -> Result<Self> {
        conditions.validate()?;
        if correlates.is_empty() {
            return Err(Error::InvalidViewingConditions(
                "no correlates requested".to_string(),
            ));
        }

        let cat02_inverse = CAT02_XYZ_TO_LMS
            .inverse()
            .ok_or(Error::SingularMatrix("CAT02"))?;
        let hpe_inverse = HPE_XYZ_TO_LMS
            .inverse()
            .ok_or(Error::SingularMatrix("Hunt-Pointer-Estevez"))?;
        let cat02_to_hpe = HPE_XYZ_TO_LMS.multiply(&cat02_inverse);
        let hpe_to_cat02 = CAT02_XYZ_TO_LMS.multiply(&hpe_inverse);

        let surround = conditions.surround.constants();
        let l_a = conditions.adapting_luminance;
        let white = conditions.white_point;

        let k = 1.0 / (5.0 * l_a + 1.0);
        let k4 = k.powi(4);
        let f_l = 0.2 * k4 * (5.0 * l_a) + 0.1 * (1.0 - k4).powi(2) * (5.0 * l_a).cbrt();
        let n = conditions.background_luminance / white.y;
        let n_bb = 0.725 * (1.0 / n).powf(0.2);
        let z = 1.48 + n.sqrt();
        let d = degree_of_adaptation(surround.f, l_a, conditions.discounting);
        let d_rgb = adaptation_gains(white, d);

        let mut constants = DerivedConstants {
            surround,
            k,
            f_l,
            n,
            n_bb,
            n_cb: n_bb,
            z,
            d,
            d_rgb,
            a_w: 0.0,
        };

        let model = Self {
            conditions,
            correlates,
            constants,
            cat02_inverse,
            cat02_to_hpe,
            hpe_to_cat02,
        };
        constants.a_w = constants.achromatic_response(model.adapted_response(white));

        if !(constants.a_w.is_finite() && constants.a_w > 0.0) {
            return Err(Error::InvalidViewingConditions(format!(
                "white has no achromatic response (A_w = {})",
                constants.a_w
            )));
        }

        debug!(
            f_l = constants.f_l,
            n = constants.n,
            n_bb = constants.n_bb,
            z = constants.z,
            d = constants.d,
            a_w = constants.a_w,
            surround = %conditions.surround,
            correlates = %correlates,
            "Derived CIECAM02 constants"
        );

        Ok(Self { constants, ..model })
    }

    /// Model under the default conditions producing every correlate
    pub fn standard() -> Result<Self> {
        Self::new(ViewingConditions::default(), CorrelateSet::ALL)
    }

    pub fn conditions(&self) -> &ViewingConditions {
        &self.conditions
    }

    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Correlates reported by [`AppearanceModel::from_xyz`]
    pub fn correlates(&self) -> CorrelateSet {
        self.correlates
    }

    /// XYZ → compressed HPE responses `R'_a G'_a B'_a`
    fn adapted_response(&self, xyz: Xyz) -> [f64; 3] {
        let rgb = CAT02_XYZ_TO_LMS.multiply_vec(xyz.to_array());
        let d_rgb = self.constants.d_rgb;
        let rgb_c = [rgb[0] * d_rgb[0], rgb[1] * d_rgb[1], rgb[2] * d_rgb[2]];
        let f_l = self.constants.f_l;
        self.cat02_to_hpe.multiply_vec(rgb_c).map(|v| compress(v, f_l))
    }

    /// Forward transform to lightness, chroma and hue angle
    fn forward(&self, xyz: Xyz) -> (f64, f64, f64) {
        let k = &self.constants;
        let rgb_a = self.adapted_response(xyz);
        let [r, g, b] = rgb_a;

        let a = r - 12.0 * g / 11.0 + b / 11.0;
        let b_opp = (r + g - 2.0 * b) / 9.0;

        let h_rad = b_opp.atan2(a);
        let h = wrap(h_rad.to_degrees(), 360.0);
        let e_t = eccentricity(h.to_radians());

        let achromatic = k.achromatic_response(rgb_a);
        let j = 100.0 * (achromatic / k.a_w).powf(k.surround.c * k.z);

        let t = k.chroma_scale() * e_t * (a * a + b_opp * b_opp).sqrt()
            / (r + g + 21.0 * b / 20.0);
        let c = t.powf(0.9) * (j / 100.0).sqrt() * k.chroma_background();

        (j, c, h)
    }

    /// XYZ (`Y_w = 100` scale) → the model's requested correlates
    pub fn from_xyz(&self, xyz: Xyz) -> Correlates {
        let (j, c, h) = self.forward(xyz);
        self.fill_out(self.correlates, &Correlates::jch(j, c, h))
    }

    /// Correlates → XYZ
    ///
    /// Lightness, chroma and hue are derived from whatever the bundle holds;
    /// a bundle from which one of them cannot be derived is an error.
    pub fn to_xyz(&self, correlates: &Correlates) -> Result<Xyz> {
        let k = &self.constants;
        let jch = self.fill_out(CorrelateSet::JCH, correlates);
        let j = jch
            .lightness
            .ok_or(Error::MissingCorrelate(Correlate::Lightness))?;
        let c = jch.chroma.ok_or(Error::MissingCorrelate(Correlate::Chroma))?;
        let h = jch.hue.ok_or(Error::MissingCorrelate(Correlate::Hue))?;

        let h_rad = h.to_radians();
        let t = (c / ((j / 100.0).sqrt() * k.chroma_background())).powf(10.0 / 9.0);
        let e_t = eccentricity(h_rad);
        let achromatic = k.a_w * (j / 100.0).powf(1.0 / k.surround.c / k.z);

        let p1 = k.chroma_scale() * e_t / t;
        let p2 = achromatic / k.n_bb + 0.305;
        let q1 = p2 * 61.0 / 20.0 * 460.0 / 1403.0;
        let q2 = 61.0 / 20.0 * 220.0 / 1403.0;
        let q3 = 21.0 / 20.0 * 6300.0 / 1403.0 - 27.0 / 1403.0;

        let (sin_h, cos_h) = h_rad.sin_cos();
        let (a, b) = if t == 0.0 || t.is_nan() {
            (0.0, 0.0)
        } else if sin_h.abs() >= cos_h.abs() {
            let b = q1 / (p1 / sin_h + q2 * cos_h / sin_h + q3);
            (b * cos_h / sin_h, b)
        } else {
            let a = q1 / (p1 / cos_h + q2 + q3 * sin_h / cos_h);
            (a, a * sin_h / cos_h)
        };

        let achromatic_part = 20.0 / 61.0 * p2;
        let rgb_a = [
            achromatic_part + 451.0 / 1403.0 * a + 288.0 / 1403.0 * b,
            achromatic_part - 891.0 / 1403.0 * a - 261.0 / 1403.0 * b,
            achromatic_part - 220.0 / 1403.0 * a - 6300.0 / 1403.0 * b,
        ];

        let f_l = k.f_l;
        let rgb_p = rgb_a.map(|v| decompress(v, f_l));
        let rgb_c = self.hpe_to_cat02.multiply_vec(rgb_p);
        let rgb = [
            rgb_c[0] / k.d_rgb[0],
            rgb_c[1] / k.d_rgb[1],
            rgb_c[2] / k.d_rgb[2],
        ];
        Ok(Xyz::from_array(self.cat02_inverse.multiply_vec(rgb)))
    }

    /// Derive the correlates in `set` from those present in `input`
    ///
    /// Resolution order is J, C, h, Q, M, s, H; each step may use anything
    /// resolved before it. Values already present are passed through, so the
    /// operation is idempotent. Correlates that cannot be derived stay `None`.
    pub fn fill_out(&self, set: CorrelateSet, input: &Correlates) -> Correlates {
        let k = &self.constants;

        let lightness = input
            .lightness
            .or_else(|| input.brightness.map(|q| k.lightness(q)));
        let brightness = input
            .brightness
            .or_else(|| lightness.map(|j| k.brightness(j)));
        let chroma = input
            .chroma
            .or_else(|| input.colorfulness.map(|m| k.chroma_from_colorfulness(m)))
            .or_else(|| {
                Some(k.chroma_from_saturation_brightness(input.saturation?, brightness?))
            });
        let hue = input.hue.or_else(|| input.hue_quadrature.map(quadrature_to_hue));
        let colorfulness = input
            .colorfulness
            .or_else(|| chroma.map(|c| k.colorfulness(c)));
        let saturation = input
            .saturation
            .or_else(|| Some(k.saturation(colorfulness?, brightness?)));
        let hue_quadrature = input.hue_quadrature.or_else(|| hue.map(hue_to_quadrature));

        Correlates {
            lightness,
            chroma,
            hue,
            brightness,
            colorfulness,
            saturation,
            hue_quadrature,
        }
        .restrict(set)
    }

    /// Fill out all seven correlates
    pub fn complete(&self, correlates: &Correlates) -> Result<FullCorrelates> {
        FullCorrelates::try_from(self.fill_out(CorrelateSet::ALL, correlates))
    }
}
