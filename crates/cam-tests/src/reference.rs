//! Reference implementation wrappers
//!
//! `palette` provides an independent sRGB ↔ XYZ conversion to check the
//! workspace converter the gamut finder is built on.

use oxcam_core::{Rgb, Xyz, XyzRgbConverter};
use palette::convert::IntoColorUnclamped;
use palette::white_point::D65;
use palette::{LinSrgb, Srgb};

/// sRGB → XYZ (`Y = 100` scale) through palette
pub fn palette_srgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear: LinSrgb<f64> = Srgb::new(rgb.r, rgb.g, rgb.b).into_linear();
    let xyz: palette::Xyz<D65, f64> = linear.into_color_unclamped();
    Xyz::new(xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0)
}

/// XYZ (`Y = 100` scale) → sRGB through palette, unclamped
pub fn palette_xyz_to_srgb(xyz: Xyz) -> Rgb {
    let xyz = palette::Xyz::<D65, f64>::new(xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0);
    let linear: LinSrgb<f64> = xyz.into_color_unclamped();
    let srgb: Srgb<f64> = Srgb::from_linear(linear);
    Rgb::new(srgb.red, srgb.green, srgb.blue)
}

/// Largest per-channel XYZ difference between `converter` and palette
pub fn max_xyz_difference<C: XyzRgbConverter>(converter: &C, colors: &[Rgb]) -> f64 {
    colors
        .iter()
        .map(|&rgb| converter.from_rgb(rgb).max_abs_diff(&palette_srgb_to_xyz(rgb)))
        .fold(0.0, f64::max)
}

/// Largest per-channel RGB difference after decoding palette's XYZ with `converter`
pub fn max_rgb_difference<C: XyzRgbConverter>(converter: &C, colors: &[Rgb]) -> f64 {
    colors
        .iter()
        .map(|&rgb| {
            let back = converter.to_rgb(palette_srgb_to_xyz(rgb));
            back.to_array()
                .iter()
                .zip(rgb.to_array())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max)
}
