//! Error types for oxcam

use thiserror::Error;

use crate::cam::Correlate;

/// Result type for oxcam operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcam operations
///
/// Every variant is a caller error: a bad configuration value or a
/// malformed input. Numeric corner cases of the model (achromatic colors,
/// hue branches) are valid inputs and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Viewing conditions that cannot produce a usable model
    #[error("Invalid viewing conditions: {0}")]
    InvalidViewingConditions(String),

    /// Surround name other than average, dim or dark
    #[error("Unknown surround: {0}")]
    UnknownSurround(String),

    /// Uniform space name other than LCD, SCD or UCS
    #[error("Unknown uniform color space: {0}")]
    UnknownUniformSpace(String),

    /// Malformed hue notation such as `"X"` or `"Rabc"`
    #[error("Invalid hue notation {notation:?}: {reason}")]
    HueNotation { notation: String, reason: String },

    /// Character that does not name a correlate
    #[error("Unknown correlate symbol: {0:?}")]
    CorrelateSymbol(char),

    /// Not enough correlates to derive the requested one
    #[error("Cannot derive correlate {0}: not enough inputs")]
    MissingCorrelate(Correlate),

    /// Matrix could not be inverted
    #[error("Singular matrix: {0}")]
    SingularMatrix(&'static str),

    /// Malformed hex RGB string
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}
