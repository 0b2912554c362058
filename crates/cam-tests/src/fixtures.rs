//! Reference scenarios
//!
//! `testdata/scenarios.json` lists sRGB colors with the correlates expected
//! under a given set of viewing conditions. Conditions are partial: missing
//! fields take the defaults (L_A = 40, Y_b = 20, average surround, D65).
//! A named `illuminant` replaces the white point of the conditions.

use anyhow::{Context, Result, anyhow};
use oxcam_core::{
    AppearanceModel, Correlate, CorrelateSet, FullCorrelates, Rgb, RgbWorkspace,
    ViewingConditions, WhitePoint, XyzRgbConverter,
};
use serde::{Deserialize, Serialize};

const SCENARIOS_JSON: &str = include_str!("../testdata/scenarios.json");

/// One color under one set of viewing conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub conditions: ViewingConditions,
    /// Standard white by name, e.g. `"D50"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illuminant: Option<String>,
    /// sRGB hex
    pub rgb: String,
    pub expected: FullCorrelates,
    pub tolerance: f64,
}

/// A correlate that missed its expected value
#[derive(Debug, Clone)]
pub struct Mismatch {
    pub scenario: String,
    pub correlate: Correlate,
    pub expected: f64,
    pub actual: f64,
}

impl Scenario {
    /// Conditions with the named illuminant, if any, applied
    pub fn resolved_conditions(&self) -> Result<ViewingConditions> {
        match &self.illuminant {
            None => Ok(self.conditions),
            Some(name) => {
                let white = WhitePoint::from_name(name)
                    .ok_or_else(|| anyhow!("{}: unknown illuminant {name:?}", self.name))?;
                Ok(self.conditions.with_white_point(white.tristimulus()))
            }
        }
    }

    /// Run the scenario through the sRGB workspace and a full model
    pub fn evaluate(&self) -> Result<Vec<Mismatch>> {
        let model = AppearanceModel::new(self.resolved_conditions()?, CorrelateSet::ALL)
            .with_context(|| format!("model for {}", self.name))?;
        let rgb = Rgb::from_hex(&self.rgb)?;
        let xyz = RgbWorkspace::srgb().from_rgb(rgb);
        let actual = model.complete(&model.from_xyz(xyz))?;

        Ok(Correlate::ALL
            .into_iter()
            .filter_map(|c| {
                let (expected, actual) = (self.expected.get(c), actual.get(c));
                let diff = match c.period() {
                    Some(period) => {
                        let d = (expected - actual).rem_euclid(period);
                        d.min(period - d)
                    }
                    None => (expected - actual).abs(),
                };
                (diff > self.tolerance).then(|| Mismatch {
                    scenario: self.name.clone(),
                    correlate: c,
                    expected,
                    actual,
                })
            })
            .collect())
    }
}

/// All bundled scenarios
pub fn scenarios() -> Result<Vec<Scenario>> {
    serde_json::from_str(SCENARIOS_JSON).context("parsing testdata/scenarios.json")
}
