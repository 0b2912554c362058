//! Gamut boundary tests
//!
//! Membership of the achromatic spine, convergence of the bisection search
//! from random start points, and agreement between the correlate-space and
//! UCS-space searches.

use cam_tests::patterns::sizes;
use cam_tests::{ColorPattern, generate_colors};
use oxcam_core::gamut::{DEFAULT_EPSILON, DEFAULT_PRECISION};
use oxcam_core::{
    AppearanceModel, CorrelateSet, Correlates, GamutFinder, RgbWorkspace, UniformSpace,
    ViewingConditions, XyzRgbConverter,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn finder() -> GamutFinder<RgbWorkspace> {
    let model = AppearanceModel::new(ViewingConditions::default(), CorrelateSet::JCH).unwrap();
    GamutFinder::new(RgbWorkspace::srgb(), model, DEFAULT_EPSILON)
}

/// In-gamut start points paired with far out-of-gamut targets
fn random_pairs(gamut: &GamutFinder<RgbWorkspace>, seed: u64) -> Vec<(Correlates, Correlates)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_colors(ColorPattern::Random(seed), sizes::TINY * 4)
        .into_iter()
        .filter_map(|rgb| {
            let inside = gamut.model().from_xyz(gamut.converter().from_rgb(rgb));
            let outside = Correlates::jch(
                inside.lightness?,
                rng.gen_range(150.0..250.0),
                rng.gen_range(0.0..360.0),
            );
            let (is_out_inside, _) = gamut.contains(&outside).ok()?;
            (!is_out_inside).then_some((inside, outside))
        })
        .collect()
}

#[test]
fn test_spine_inside() {
    let gamut = finder();
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let (inside, rgb) = gamut.contains(&gamut.spine(t)).unwrap();
        assert!(inside, "spine({t}) -> {rgb:?}");
    }
}

#[test]
fn test_spine_inside_all_conditions() {
    for surround in ["average", "dim", "dark"] {
        let vc = ViewingConditions {
            surround: surround.parse().unwrap(),
            ..ViewingConditions::default()
        };
        let model = AppearanceModel::new(vc, CorrelateSet::ALL).unwrap();
        let gamut = GamutFinder::new(RgbWorkspace::srgb(), model, DEFAULT_EPSILON);
        assert!(gamut.contains(&gamut.spine(0.0)).unwrap().0, "{surround}");
        assert!(gamut.contains(&gamut.spine(1.0)).unwrap().0, "{surround}");
    }
}

#[test]
fn test_limit_converges_from_random_points() {
    let gamut = finder();
    let pairs = random_pairs(&gamut, 2024);
    assert!(pairs.len() > 20, "only {} usable pairs", pairs.len());

    for (inside, outside) in pairs {
        let edge = gamut.limit(&inside, &outside, DEFAULT_PRECISION).unwrap();
        let (is_inside, rgb) = gamut.contains(&edge).unwrap();
        assert!(is_inside, "{inside:?} -> {outside:?} gave {rgb:?}");
        assert!(edge.distance(&outside) <= inside.distance(&outside) + 1e-9);
        assert_eq!(edge.present(), CorrelateSet::JCH);
    }
}

#[test]
fn test_limit_lands_near_boundary() {
    let gamut = finder();
    for (inside, outside) in random_pairs(&gamut, 77) {
        let edge = gamut.limit(&inside, &outside, 1e-6).unwrap();
        // One more precision step toward the outside point leaves the gamut
        let gap = edge.distance(&outside);
        let beyond = edge.lerp(&outside, 1e-4 / gap);
        let (_, rgb) = gamut.contains(&beyond).unwrap();
        let crop = gamut.crop(rgb);
        let overshoot = rgb
            .to_array()
            .iter()
            .zip(crop.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(overshoot < 1e-3, "{edge:?}: {rgb:?}");
    }
}

#[test]
fn test_limit_in_ucs_stays_inside() {
    let gamut = finder();
    let ucs = UniformSpace::default();
    for (inside, outside) in random_pairs(&gamut, 31) {
        let edge = gamut
            .limit_in_ucs(&inside, &outside, &ucs, DEFAULT_PRECISION)
            .unwrap();
        assert_eq!(edge.present(), CorrelateSet::JCH);
        assert!(gamut.contains(&edge).unwrap().0, "{edge:?}");
    }
}

#[test]
fn test_crop_is_displayable() {
    let gamut = finder();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..sizes::SMALL {
        let jch = Correlates::jch(
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..150.0),
            rng.gen_range(0.0..360.0),
        );
        let (_, rgb) = gamut.contains(&jch).unwrap();
        if rgb.to_array().iter().all(|v| v.is_finite()) {
            assert!(gamut.crop(rgb).is_in_gamut(DEFAULT_EPSILON));
        }
    }
}
