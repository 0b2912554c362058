//! Hue quadrature and hue notation
//!
//! Hue quadrature `H` re-spaces the hue circle so that the four unique hues
//! sit at 0 (red), 100 (yellow), 200 (green) and 300 (blue). Between two
//! unique hues `H` is a ratio of eccentricity-weighted angular distances,
//! which makes the mapping piecewise and invertible in closed form.
//!
//! Hue notation writes a quadrature value as letters: `"R"`, `"RY"` (half
//! way), `"R25Y"` (a quarter of the way from red to yellow). A handful of
//! single-letter shortcuts (`O` for orange, `C` for cyan, ...) expand to
//! two-letter forms.

use crate::math::interpolation::{cyclic_lerp, wrap};
use crate::{Error, Result};

struct UniqueHue {
    hue: f64,
    eccentricity: f64,
    quadrature: f64,
}

/// Red, yellow, green, blue, and red again one turn later
const UNIQUE_HUES: [UniqueHue; 5] = [
    UniqueHue { hue: 20.14, eccentricity: 0.8, quadrature: 0.0 },
    UniqueHue { hue: 90.00, eccentricity: 0.7, quadrature: 100.0 },
    UniqueHue { hue: 164.25, eccentricity: 1.0, quadrature: 200.0 },
    UniqueHue { hue: 237.53, eccentricity: 1.2, quadrature: 300.0 },
    UniqueHue { hue: 380.14, eccentricity: 0.8, quadrature: 400.0 },
];

/// Letters of the unique hues, in quadrature order
pub const HUE_SYMBOLS: [char; 4] = ['R', 'Y', 'G', 'B'];

const SHORTCUTS: [(char, &str); 8] = [
    ('O', "RY"),
    ('S', "YG"),
    ('T', "G25B"),
    ('C', "GB"),
    ('A', "B25G"),
    ('V', "B25R"),
    ('M', "BR"),
    ('P', "R25B"),
];

/// Hue angle in degrees → hue quadrature in `[0, 400)`
pub fn hue_to_quadrature(h: f64) -> f64 {
    let mut h = wrap(h, 360.0);
    if h < UNIQUE_HUES[0].hue {
        h += 360.0;
    }

    let j = UNIQUE_HUES
        .windows(2)
        .position(|pair| h <= pair[1].hue)
        .unwrap_or(3);
    let (lo, hi) = (&UNIQUE_HUES[j], &UNIQUE_HUES[j + 1]);

    let d_lo = (h - lo.hue) / lo.eccentricity;
    let d_hi = (hi.hue - h) / hi.eccentricity;
    wrap(lo.quadrature + 100.0 * d_lo / (d_lo + d_hi), 400.0)
}

/// Hue quadrature → hue angle in degrees, `[0, 360)`
pub fn quadrature_to_hue(quadrature: f64) -> f64 {
    let quadrature = wrap(quadrature, 400.0);
    let j = ((quadrature / 100.0).floor() as usize).min(3);
    let amount = quadrature - 100.0 * j as f64;

    let (lo, hi) = (&UNIQUE_HUES[j], &UNIQUE_HUES[j + 1]);
    let (e_j, h_j) = (lo.eccentricity, lo.hue);
    let (e_k, h_k) = (hi.eccentricity, hi.hue);

    let h = (amount * (e_k * h_j - e_j * h_k) - 100.0 * h_j * e_k)
        / (amount * (e_k - e_j) - 100.0 * e_k);
    wrap(h, 360.0)
}

fn notation_error(notation: &str, reason: impl Into<String>) -> Error {
    Error::HueNotation {
        notation: notation.to_string(),
        reason: reason.into(),
    }
}

fn letter_quadrature(notation: &str, letter: char) -> Result<f64> {
    let letter = letter.to_ascii_uppercase();
    if let Some((_, expansion)) = SHORTCUTS.iter().find(|(s, _)| *s == letter) {
        return hue_from_notation(expansion);
    }
    HUE_SYMBOLS
        .iter()
        .position(|&s| s == letter)
        .map(|i| 100.0 * i as f64)
        .ok_or_else(|| notation_error(notation, format!("unknown hue letter {letter:?}")))
}

/// Parse hue notation into a hue quadrature value
///
/// Accepts `a`, `ab` and `a<p>b` where `a` and `b` are hue letters (unique
/// hues or shortcuts, any case) and `p` is the percentage of the way from
/// `a` to `b`. A missing percentage means 50.
pub fn hue_from_notation(notation: &str) -> Result<f64> {
    let chars: Vec<char> = notation.chars().collect();
    let (first, middle, last) = match chars.as_slice() {
        [] => return Err(notation_error(notation, "empty")),
        [only] => (*only, None, *only),
        [first, middle @ .., last] => (*first, Some(middle), *last),
    };

    if !first.is_ascii_alphabetic() || !last.is_ascii_alphabetic() {
        return Err(notation_error(notation, "must start and end with a hue letter"));
    }

    let percentage = match middle {
        Some(digits) if !digits.is_empty() => {
            let text: String = digits.iter().collect();
            let p: f64 = text
                .parse()
                .map_err(|_| notation_error(notation, format!("bad percentage {text:?}")))?;
            if !(0.0..=100.0).contains(&p) {
                return Err(notation_error(notation, "percentage outside 0..100"));
            }
            p
        }
        _ => 50.0,
    };

    let from = letter_quadrature(notation, first)?;
    let to = letter_quadrature(notation, last)?;
    Ok(cyclic_lerp(from, to, percentage / 100.0, 400.0))
}

/// Format a hue quadrature value as hue notation
///
/// The nearer unique hue comes first, so the percentage never exceeds 50.
/// Within one percent of a unique hue only its letter is written.
pub fn notation_from_hue(quadrature: f64) -> String {
    let quadrature = wrap(quadrature, 400.0);
    let mut i = ((quadrature / 100.0).floor() as usize).min(3);
    let mut j = (i + 1) % HUE_SYMBOLS.len();
    let mut p = quadrature - 100.0 * i as f64;

    if p > 50.0 {
        std::mem::swap(&mut i, &mut j);
        p = 100.0 - p;
    }

    if p < 1.0 {
        HUE_SYMBOLS[i].to_string()
    } else {
        format!("{}{}{}", HUE_SYMBOLS[i], p.round(), HUE_SYMBOLS[j])
    }
}
