//! Gamut boundary search
//!
//! [`GamutFinder`] tests whether a perceptual color is reproducible on an RGB
//! device and bisects toward the gamut boundary along a path between an
//! inside and an outside color. The boundary has no closed form under
//! CIECAM02, so the search is iterative; it is capped at
//! [`DEFAULT_MAX_ITERATIONS`] steps by default.

use tracing::{debug, trace, warn};

use crate::cam::{AppearanceModel, CorrelateSet, Correlates};
use crate::color::{Rgb, XyzRgbConverter};
use crate::ucs::{Jmh, UcsPoint, UniformSpace};
use crate::Result;

/// Slack admitted around the `[0, 1]` device range
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Distance at which [`GamutFinder::limit`] stops
pub const DEFAULT_PRECISION: f64 = 1e-3;

/// Bisection steps before giving up on `precision`
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Gamut membership and boundary search for one device and one model
#[derive(Debug, Clone)]
pub struct GamutFinder<C> {
    converter: C,
    model: AppearanceModel,
    epsilon: f64,
    max_iterations: usize,
    black: Correlates,
    white: Correlates,
}

impl<C: XyzRgbConverter> GamutFinder<C> {
    pub fn new(converter: C, model: AppearanceModel, epsilon: f64) -> Self {
        let black = model.from_xyz(converter.from_rgb(Rgb::BLACK));
        let white = model.from_xyz(converter.from_rgb(Rgb::WHITE));
        debug!(
            black_j = black.lightness,
            white_j = white.lightness,
            epsilon,
            "Gamut anchors"
        );
        Self {
            converter,
            model,
            epsilon,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            black,
            white,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn model(&self) -> &AppearanceModel {
        &self.model
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Correlates of device black
    pub fn black(&self) -> &Correlates {
        &self.black
    }

    /// Correlates of device white
    pub fn white(&self) -> &Correlates {
        &self.white
    }

    /// Whether `correlates` maps inside the device cube, and the RGB it maps to
    pub fn contains(&self, correlates: &Correlates) -> Result<(bool, Rgb)> {
        let rgb = self.converter.to_rgb(self.model.to_xyz(correlates)?);
        Ok((rgb.is_in_gamut(self.epsilon), rgb))
    }

    /// Bisect between `inside` and `outside` until they are `precision` apart
    ///
    /// Interpolation and distance are taken over the correlates both points
    /// share, with hue on the shorter arc. Returns the last point found
    /// inside the gamut.
    pub fn limit(
        &self,
        inside: &Correlates,
        outside: &Correlates,
        precision: f64,
    ) -> Result<Correlates> {
        self.bisect(
            *inside,
            *outside,
            precision,
            |p, q| p.distance(q),
            |p, q| p.lerp(q, 0.5),
            |mid| self.contains(mid).map(|(is_inside, _)| is_inside),
        )
    }

    /// Like [`GamutFinder::limit`], but along a straight line in `space`
    ///
    /// The result carries the same correlates as `inside`.
    pub fn limit_in_ucs(
        &self,
        inside: &Correlates,
        outside: &Correlates,
        space: &UniformSpace,
        precision: f64,
    ) -> Result<Correlates> {
        let to_point = |c: &Correlates| -> Result<UcsPoint> {
            let jmh = Jmh::try_from(&self.model.fill_out(CorrelateSet::JMH, c))?;
            Ok(space.from_cam(jmh))
        };
        let to_correlates = |p: &UcsPoint| Correlates::from(space.to_cam(*p));

        let boundary = self.bisect(
            to_point(inside)?,
            to_point(outside)?,
            precision,
            |p, q| space.distance(p, q),
            |p, q| p.lerp(q, 0.5),
            |mid| {
                self.contains(&to_correlates(mid))
                    .map(|(is_inside, _)| is_inside)
            },
        )?;
        Ok(self
            .model
            .fill_out(inside.present(), &to_correlates(&boundary)))
    }

    fn bisect<P: Copy>(
        &self,
        mut inside: P,
        mut outside: P,
        precision: f64,
        distance: impl Fn(&P, &P) -> f64,
        midpoint: impl Fn(&P, &P) -> P,
        mut is_inside: impl FnMut(&P) -> Result<bool>,
    ) -> Result<P> {
        let mut iterations = 0;
        loop {
            let gap = distance(&inside, &outside);
            if gap.is_nan() || gap <= precision {
                break;
            }
            if iterations == self.max_iterations {
                warn!(
                    iterations,
                    gap, precision, "Gamut boundary search hit the iteration cap"
                );
                break;
            }
            let mid = midpoint(&inside, &outside);
            let mid_inside = is_inside(&mid)?;
            trace!(iteration = iterations, gap, mid_inside, "bisect");
            if mid_inside {
                inside = mid;
            } else {
                outside = mid;
            }
            iterations += 1;
        }
        Ok(inside)
    }

    /// The achromatic axis: black at `t = 0`, white at `t = 1`
    pub fn spine(&self, t: f64) -> Correlates {
        self.black.lerp(&self.white, t)
    }

    /// Clamp each channel into `[-epsilon, 1 + epsilon]`
    pub fn crop(&self, rgb: Rgb) -> Rgb {
        let (lo, hi) = (-self.epsilon, 1.0 + self.epsilon);
        rgb.map(|v| v.clamp(lo, hi))
    }
}
