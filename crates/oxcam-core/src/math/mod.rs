//! Mathematical building blocks
//!
//! - 3x3 matrix operations for workspace and cone-space transforms
//! - sRGB and Adobe RGB transfer functions
//! - CAT02 chromatic adaptation
//! - Linear and cyclic (hue-aware) interpolation

pub mod chromatic_adaptation;
pub mod gamma;
pub mod interpolation;
pub mod matrix;

pub use chromatic_adaptation::{
    CAT02_XYZ_TO_LMS, HPE_XYZ_TO_LMS, adaptation_gains, degree_of_adaptation,
};
pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use interpolation::{cyclic_difference, cyclic_lerp, lerp, wrap};
pub use matrix::Matrix3x3;
