//! Color value types and the tristimulus ↔ RGB seam
//!
//! - CIE XYZ tristimulus values
//! - Device RGB with hex parsing
//! - Standard illuminant white points
//! - RGB workspaces implementing [`XyzRgbConverter`]

pub mod rgb;
pub mod white_point;
pub mod workspace;
pub mod xyz;

pub use rgb::Rgb;
pub use white_point::{D50, D65, WhitePoint};
pub use workspace::{RgbWorkspace, TransferFunction, XyzRgbConverter};
pub use xyz::Xyz;
