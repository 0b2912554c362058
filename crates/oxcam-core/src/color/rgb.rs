//! Device RGB values
//!
//! Components are nominally in [0, 1] but are deliberately not clamped:
//! the gamut finder needs to see how far outside the cube a color falls.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Gamma-encoded device RGB
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_array([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// 8-bit code values
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_array([r, g, b].map(|v| f64::from(v) / 255.0))
    }

    /// 8-bit values, clamped to the cube
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array()
            .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Parse `rrggbb` or `rgb`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || Error::InvalidHex(hex.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let r = nibble(0)?;
                let g = nibble(1)?;
                let b = nibble(2)?;
                Ok(Self::from_u8(r * 17, g * 17, b * 17))
            }
            6 => {
                let byte =
                    |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::from_u8(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase `rrggbb`, clamped to the cube
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Whether every channel lies in `[-epsilon, 1 + epsilon]`
    #[inline]
    pub fn is_in_gamut(&self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .all(|&v| v >= -epsilon && v <= 1.0 + epsilon)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
