//! CIECAM02 color appearance model
//!
//! - [`AppearanceModel`]: forward and inverse transforms, correlate completion
//! - [`ViewingConditions`]: the environment a model is built for
//! - [`Correlates`] / [`FullCorrelates`]: partial and complete correlate bundles
//! - [`hue_quadrature`]: hue quadrature and hue notation

pub mod correlates;
pub mod hue_quadrature;
pub mod model;
pub mod viewing;

pub use correlates::{Correlate, CorrelateSet, Correlates, FullCorrelates};
pub use hue_quadrature::{
    hue_from_notation, hue_to_quadrature, notation_from_hue, quadrature_to_hue,
};
pub use model::{AppearanceModel, DerivedConstants};
pub use viewing::{Surround, SurroundConstants, ViewingConditions};
