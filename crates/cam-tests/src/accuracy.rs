//! Round-trip accuracy measurement
//!
//! Pushes colors through XYZ → correlates → XYZ and summarizes the error.

use oxcam_core::{AppearanceModel, Correlates, Result, Rgb, XyzRgbConverter};

/// Statistics from a round-trip run
#[derive(Debug, Clone)]
pub struct RoundtripStats {
    /// Mean of the per-color maximum channel error
    pub mean: f64,
    /// Maximum channel error over all colors
    pub max: f64,
    /// 95th percentile of the per-color error
    pub p95: f64,
    /// Number of samples
    pub count: usize,
    /// Color with the largest error
    pub worst: Option<Rgb>,
}

impl RoundtripStats {
    /// Whether every color came back within `tolerance` per XYZ channel
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Round-trip `colors` through `model`, optionally thinning the bundle first
///
/// `strip` lets a test drop correlates from the forward result so the inverse
/// has to derive J, C and h from what is left.
pub fn roundtrip_stats<C: XyzRgbConverter>(
    model: &AppearanceModel,
    converter: &C,
    colors: &[Rgb],
    strip: impl Fn(Correlates) -> Correlates,
) -> Result<RoundtripStats> {
    let mut errors = Vec::with_capacity(colors.len());
    let mut worst = None;
    let mut max = 0.0;

    for &rgb in colors {
        let xyz = converter.from_rgb(rgb);
        let back = model.to_xyz(&strip(model.from_xyz(xyz)))?;
        let err = xyz.max_abs_diff(&back);
        // NaN counts as the worst possible error
        let err = if err.is_nan() { f64::INFINITY } else { err };
        if err > max || worst.is_none() {
            max = err;
            worst = Some(rgb);
        }
        errors.push(err);
    }

    errors.sort_by(f64::total_cmp);
    let count = errors.len();
    let mean = if count > 0 {
        errors.iter().sum::<f64>() / count as f64
    } else {
        0.0
    };
    let p95 = errors
        .get((count * 95 / 100).min(count.saturating_sub(1)))
        .copied()
        .unwrap_or(0.0);

    Ok(RoundtripStats {
        mean,
        max,
        p95,
        count,
        worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxcam_core::RgbWorkspace;

    #[test]
    fn test_stats_on_corners() {
        let model = AppearanceModel::standard().unwrap();
        let colors = [Rgb::BLACK, Rgb::WHITE, Rgb::new(1.0, 0.0, 0.0)];
        let stats = roundtrip_stats(&model, &RgbWorkspace::srgb(), &colors, |c| c).unwrap();
        assert_eq!(stats.count, 3);
        assert!(stats.within(1e-9), "{stats:?}");
        assert!(stats.mean <= stats.max);
        assert!(stats.p95 <= stats.max);
    }

    #[test]
    fn test_empty_input() {
        let model = AppearanceModel::standard().unwrap();
        let stats = roundtrip_stats(&model, &RgbWorkspace::srgb(), &[], |c| c).unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.worst.is_none());
    }
}
