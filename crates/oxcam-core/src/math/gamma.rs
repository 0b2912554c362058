//! sRGB transfer function
//!
//! IEC 61966-2-1. Negative inputs fall on the linear segment, so values
//! coming back from the inverse appearance model stay negative and the
//! gamut test can see them.

/// sRGB decode (encoded → linear)
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB encode (linear → encoded)
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Adobe RGB (1998) decode, pure power 563/256 mirrored through zero
#[inline]
pub fn adobe_gamma_decode(encoded: f64) -> f64 {
    encoded.abs().powf(563.0 / 256.0).copysign(encoded)
}

/// Adobe RGB (1998) encode
#[inline]
pub fn adobe_gamma_encode(linear: f64) -> f64 {
    linear.abs().powf(256.0 / 563.0).copysign(linear)
}
