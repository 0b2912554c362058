//! # oxcam - CIECAM02 color appearance in Rust
//!
//! Perceptual color for image pipelines: the CIECAM02 appearance model,
//! gamut boundary search on RGB devices, and the CAM02 uniform color spaces.
//!
//! ## Components
//!
//! - **Appearance model** ([`AppearanceModel`]): XYZ ↔ the seven perceptual
//!   correlates (J, C, h, Q, M, s, H) under given [`ViewingConditions`]
//! - **Hue quadrature** ([`cam::hue_quadrature`]): hue angle ↔ H and hue
//!   notation such as `"R25Y"`
//! - **Gamut finder** ([`GamutFinder`]): membership test and bisection toward
//!   the boundary of an RGB gamut
//! - **Uniform spaces** ([`UniformSpace`]): CAM02-LCD, -SCD and -UCS
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxcam_core::{
//!     AppearanceModel, Correlate, CorrelateSet, GamutFinder, Rgb, RgbWorkspace,
//!     ViewingConditions, XyzRgbConverter, gamut,
//! };
//!
//! let model = AppearanceModel::new(ViewingConditions::default(), CorrelateSet::JCH)?;
//! let srgb = RgbWorkspace::srgb();
//!
//! // #e0cda9 → J ≈ 77.8, C ≈ 17.0, h ≈ 81.0
//! let sand = model.from_xyz(srgb.from_rgb(Rgb::from_hex("e0cda9")?));
//!
//! // Push chroma out and find where the sRGB gamut ends
//! let finder = GamutFinder::new(srgb, model, gamut::DEFAULT_EPSILON);
//! let vivid = sand.with(Correlate::Chroma, 90.0);
//! let edge = finder.limit(&sand, &vivid, gamut::DEFAULT_PRECISION)?;
//! # Ok::<(), oxcam_core::Error>(())
//! ```

pub mod cam;
pub mod color;
pub mod error;
pub mod gamut;
pub mod math;
pub mod ucs;

pub use cam::{
    AppearanceModel, Correlate, CorrelateSet, Correlates, FullCorrelates, Surround,
    ViewingConditions,
};
pub use color::{Rgb, RgbWorkspace, WhitePoint, Xyz, XyzRgbConverter};
pub use error::{Error, Result};
pub use gamut::GamutFinder;
pub use ucs::{Jmh, UcsPoint, UniformSpace, UniformSpaceKind};

/// Version of oxcam
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
