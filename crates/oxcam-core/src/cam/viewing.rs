//! Viewing conditions
//!
//! Everything the appearance model needs to know about the environment a
//! color is seen in. Serializable so callers can keep conditions in JSON or
//! TOML configuration next to the rest of their pipeline settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{D65, Xyz};
use crate::{Error, Result};

/// Relative luminance of the area surrounding the stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surround {
    /// Surface colors, reflection prints
    #[default]
    Average,
    /// Television, monitors in a dim room
    Dim,
    /// Projection in a dark room
    Dark,
}

/// Induction constants of a surround
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurroundConstants {
    /// Maximum degree of adaptation `F`
    pub f: f64,
    /// Impact of surround `c`
    pub c: f64,
    /// Chromatic induction factor `N_c`
    pub n_c: f64,
}

impl Surround {
    pub const fn constants(self) -> SurroundConstants {
        match self {
            Self::Average => SurroundConstants { f: 1.0, c: 0.69, n_c: 1.0 },
            Self::Dim => SurroundConstants { f: 0.9, c: 0.59, n_c: 0.9 },
            Self::Dark => SurroundConstants { f: 0.8, c: 0.535, n_c: 0.8 },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Dim => "dim",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Surround {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Self::Average),
            "dim" => Ok(Self::Dim),
            "dark" => Ok(Self::Dark),
            _ => Err(Error::UnknownSurround(s.to_string())),
        }
    }
}

impl fmt::Display for Surround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of the viewing environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewingConditions {
    /// Luminance of the adapting field `L_A`, cd/m²
    pub adapting_luminance: f64,
    /// Luminance of the background `Y_b`, on the scale of the white
    pub background_luminance: f64,
    /// Assume full adaptation to the illuminant (`D = 1`)
    pub discounting: bool,
    pub surround: Surround,
    /// Reference white, `Y = 100` scale
    pub white_point: Xyz,
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self {
            adapting_luminance: 40.0,
            background_luminance: 20.0,
            discounting: false,
            surround: Surround::Average,
            white_point: D65.tristimulus(),
        }
    }
}

impl ViewingConditions {
    pub fn with_surround(mut self, surround: Surround) -> Self {
        self.surround = surround;
        self
    }

    pub fn with_discounting(mut self, discounting: bool) -> Self {
        self.discounting = discounting;
        self
    }

    pub fn with_white_point(mut self, white_point: Xyz) -> Self {
        self.white_point = white_point;
        self
    }

    /// Reject conditions that would make the derived constants non-finite
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidViewingConditions(msg));

        if !(self.adapting_luminance.is_finite() && self.adapting_luminance > 0.0) {
            return invalid(format!(
                "adapting luminance must be positive, got {}",
                self.adapting_luminance
            ));
        }
        if !(self.background_luminance.is_finite() && self.background_luminance > 0.0) {
            return invalid(format!(
                "background luminance must be positive, got {}",
                self.background_luminance
            ));
        }
        if !self.white_point.is_finite() {
            return invalid(format!("white point is not finite: {:?}", self.white_point));
        }
        if self.white_point.y <= 0.0 {
            return invalid(format!(
                "white point luminance must be positive, got {}",
                self.white_point.y
            ));
        }
        Ok(())
    }
}
