//! Perceptual correlates and bundles of them
//!
//! The appearance model produces up to seven correlates. A [`Correlates`]
//! bundle may hold any subset (absent values are `None`, never NaN);
//! [`FullCorrelates`] always holds all seven. [`CorrelateSet`] selects which
//! ones an operation should produce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::interpolation::{cyclic_difference, cyclic_lerp, lerp};
use crate::{Error, Result};

/// One of the seven CIECAM02 correlates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correlate {
    /// J
    Lightness,
    /// C
    Chroma,
    /// h, degrees in [0, 360)
    Hue,
    /// Q
    Brightness,
    /// M
    Colorfulness,
    /// s
    Saturation,
    /// H, in [0, 400)
    HueQuadrature,
}

impl Correlate {
    /// Canonical order, which is also the order `fill_out` resolves them in
    pub const ALL: [Correlate; 7] = [
        Correlate::Lightness,
        Correlate::Chroma,
        Correlate::Hue,
        Correlate::Brightness,
        Correlate::Colorfulness,
        Correlate::Saturation,
        Correlate::HueQuadrature,
    ];

    /// Conventional one-letter symbol (`J C h Q M s H`)
    pub const fn symbol(self) -> char {
        match self {
            Self::Lightness => 'J',
            Self::Chroma => 'C',
            Self::Hue => 'h',
            Self::Brightness => 'Q',
            Self::Colorfulness => 'M',
            Self::Saturation => 's',
            Self::HueQuadrature => 'H',
        }
    }

    /// Inverse of [`Correlate::symbol`]; case matters (`h` vs `H`)
    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.symbol() == symbol)
            .ok_or(Error::CorrelateSymbol(symbol))
    }

    /// Length of the circle for the angular correlates
    pub const fn period(self) -> Option<f64> {
        match self {
            Self::Hue => Some(360.0),
            Self::HueQuadrature => Some(400.0),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Correlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A set of correlates, stored as a bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CorrelateSet(u8);

impl CorrelateSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b111_1111);
    /// Lightness, chroma, hue: the minimum the inverse model needs
    pub const JCH: Self = Self::of(&[Correlate::Lightness, Correlate::Chroma, Correlate::Hue]);
    /// Lightness, colorfulness, hue: the input of the uniform spaces
    pub const JMH: Self =
        Self::of(&[Correlate::Lightness, Correlate::Colorfulness, Correlate::Hue]);

    pub const fn of(correlates: &[Correlate]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < correlates.len() {
            bits |= correlates[i].bit();
            i += 1;
        }
        Self(bits)
    }

    #[inline]
    pub const fn contains(self, correlate: Correlate) -> bool {
        self.0 & correlate.bit() != 0
    }

    #[inline]
    pub const fn with(self, correlate: Correlate) -> Self {
        Self(self.0 | correlate.bit())
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in canonical order
    pub fn iter(self) -> impl Iterator<Item = Correlate> {
        Correlate::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Correlate> for CorrelateSet {
    fn from_iter<I: IntoIterator<Item = Correlate>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Parses a symbol string such as `"JCh"` or `"QJMCshH"`
impl FromStr for CorrelateSet {
    type Err = Error;

    fn from_str(symbols: &str) -> Result<Self> {
        symbols.chars().map(Correlate::from_symbol).collect()
    }
}

impl fmt::Display for CorrelateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for CorrelateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CorrelateSet({self})")
    }
}

/// A possibly partial bundle of correlates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Correlates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorfulness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_quadrature: Option<f64>,
}

impl Correlates {
    /// An empty bundle
    pub const fn new() -> Self {
        Self {
            lightness: None,
            chroma: None,
            hue: None,
            brightness: None,
            colorfulness: None,
            saturation: None,
            hue_quadrature: None,
        }
    }

    /// Lightness, chroma and hue angle
    pub const fn jch(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness: Some(lightness),
            chroma: Some(chroma),
            hue: Some(hue),
            ..Self::new()
        }
    }

    /// Lightness, colorfulness and hue angle
    pub const fn jmh(lightness: f64, colorfulness: f64, hue: f64) -> Self {
        Self {
            lightness: Some(lightness),
            colorfulness: Some(colorfulness),
            hue: Some(hue),
            ..Self::new()
        }
    }

    pub const fn get(&self, correlate: Correlate) -> Option<f64> {
        match correlate {
            Correlate::Lightness => self.lightness,
            Correlate::Chroma => self.chroma,
            Correlate::Hue => self.hue,
            Correlate::Brightness => self.brightness,
            Correlate::Colorfulness => self.colorfulness,
            Correlate::Saturation => self.saturation,
            Correlate::HueQuadrature => self.hue_quadrature,
        }
    }

    pub fn set(&mut self, correlate: Correlate, value: Option<f64>) {
        let slot = match correlate {
            Correlate::Lightness => &mut self.lightness,
            Correlate::Chroma => &mut self.chroma,
            Correlate::Hue => &mut self.hue,
            Correlate::Brightness => &mut self.brightness,
            Correlate::Colorfulness => &mut self.colorfulness,
            Correlate::Saturation => &mut self.saturation,
            Correlate::HueQuadrature => &mut self.hue_quadrature,
        };
        *slot = value;
    }

    /// Builder form of [`Correlates::set`]
    pub fn with(mut self, correlate: Correlate, value: f64) -> Self {
        self.set(correlate, Some(value));
        self
    }

    /// Drop everything outside `set`
    pub fn restrict(&self, set: CorrelateSet) -> Self {
        let mut out = Self::new();
        for c in set.iter() {
            out.set(c, self.get(c));
        }
        out
    }

    /// Which correlates are present
    pub fn present(&self) -> CorrelateSet {
        Correlate::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some())
            .collect()
    }

    /// Correlate-wise interpolation; hue and hue quadrature take the shorter arc
    ///
    /// Only correlates present in both bundles appear in the result.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut out = Self::new();
        for c in Correlate::ALL {
            if let (Some(a), Some(b)) = (self.get(c), other.get(c)) {
                let v = match c.period() {
                    Some(period) => cyclic_lerp(a, b, t, period),
                    None => lerp(a, b, t),
                };
                out.set(c, Some(v));
            }
        }
        out
    }

    /// Euclidean distance over the correlates present in both bundles
    ///
    /// Angular correlates contribute their shorter-arc difference.
    pub fn distance(&self, other: &Self) -> f64 {
        Correlate::ALL
            .into_iter()
            .filter_map(|c| {
                let (a, b) = (self.get(c)?, other.get(c)?);
                let d = match c.period() {
                    Some(period) => cyclic_difference(a, b, period),
                    None => a - b,
                };
                Some(d * d)
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// All seven correlates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FullCorrelates {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub brightness: f64,
    pub colorfulness: f64,
    pub saturation: f64,
    pub hue_quadrature: f64,
}

impl FullCorrelates {
    pub const fn get(&self, correlate: Correlate) -> f64 {
        match correlate {
            Correlate::Lightness => self.lightness,
            Correlate::Chroma => self.chroma,
            Correlate::Hue => self.hue,
            Correlate::Brightness => self.brightness,
            Correlate::Colorfulness => self.colorfulness,
            Correlate::Saturation => self.saturation,
            Correlate::HueQuadrature => self.hue_quadrature,
        }
    }
}

impl From<FullCorrelates> for Correlates {
    fn from(full: FullCorrelates) -> Self {
        Self {
            lightness: Some(full.lightness),
            chroma: Some(full.chroma),
            hue: Some(full.hue),
            brightness: Some(full.brightness),
            colorfulness: Some(full.colorfulness),
            saturation: Some(full.saturation),
            hue_quadrature: Some(full.hue_quadrature),
        }
    }
}

impl TryFrom<Correlates> for FullCorrelates {
    type Error = Error;

    fn try_from(partial: Correlates) -> Result<Self> {
        let take = |c: Correlate| partial.get(c).ok_or(Error::MissingCorrelate(c));
        Ok(Self {
            lightness: take(Correlate::Lightness)?,
            chroma: take(Correlate::Chroma)?,
            hue: take(Correlate::Hue)?,
            brightness: take(Correlate::Brightness)?,
            colorfulness: take(Correlate::Colorfulness)?,
            saturation: take(Correlate::Saturation)?,
            hue_quadrature: take(Correlate::HueQuadrature)?,
        })
    }
}
