//! # cam-tests
//!
//! Cross-checking and property testing for oxcam.
//!
//! This crate provides:
//! - Reference scenarios (sRGB color, viewing conditions, expected correlates)
//! - Deterministic color sets for sweeping the model
//! - Round-trip accuracy statistics
//! - An independent sRGB ↔ XYZ conversion via `palette`
//!
//! ## Test Categories
//!
//! 1. **Appearance round trip**: XYZ → correlates → XYZ, fill-out
//! 2. **Gamut boundary**: membership, bisection convergence, spine
//! 3. **Hue notation**: quadrature inverse and notation identity
//! 4. **Uniform spaces**: inverse, distance behavior
//! 5. **Converter reference**: workspace vs `palette`

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{RoundtripStats, roundtrip_stats};
pub use fixtures::{Mismatch, Scenario, scenarios};
pub use patterns::{ColorPattern, generate_colors};
