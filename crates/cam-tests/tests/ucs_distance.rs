//! Uniform color space tests
//!
//! Inverse accuracy over real colors and the behavior of the color
//! difference on small and large steps.

use cam_tests::patterns::sizes;
use cam_tests::{ColorPattern, generate_colors};
use oxcam_core::ucs::{Jmh, UniformSpaceKind};
use oxcam_core::{
    AppearanceModel, CorrelateSet, Correlates, Rgb, RgbWorkspace, UniformSpace,
    ViewingConditions, XyzRgbConverter,
};

fn jmh_of(model: &AppearanceModel, rgb: Rgb) -> Jmh {
    let cam = model.from_xyz(RgbWorkspace::srgb().from_rgb(rgb));
    Jmh::try_from(&cam).unwrap()
}

fn jmh_model() -> AppearanceModel {
    AppearanceModel::new(ViewingConditions::default(), CorrelateSet::JMH).unwrap()
}

#[test]
fn test_inverse_over_colors() {
    let model = jmh_model();
    for kind in [UniformSpaceKind::Lcd, UniformSpaceKind::Scd, UniformSpaceKind::Ucs] {
        let space = UniformSpace::from_kind(kind);
        for rgb in generate_colors(ColorPattern::Random(17), sizes::SMALL) {
            let jmh = jmh_of(&model, rgb);
            let back = space.to_cam(space.from_cam(jmh));
            assert!((back.j - jmh.j).abs() < 1e-9, "{kind} {rgb}");
            assert!((back.m - jmh.m).abs() < 1e-9, "{kind} {rgb}");
            let dh = (back.h - jmh.h).rem_euclid(360.0);
            assert!(dh.min(360.0 - dh) < 1e-6, "{kind} {rgb}");
        }
    }
}

#[test]
fn test_through_model_roundtrip() {
    // UCS point → J, M, h → XYZ → sRGB recovers the color
    let model = jmh_model();
    let srgb = RgbWorkspace::srgb();
    let space = UniformSpace::default();
    for rgb in generate_colors(ColorPattern::SkinTones, 6) {
        let point = space.from_cam(jmh_of(&model, rgb));
        let cam = Correlates::from(space.to_cam(point));
        let back = srgb.to_rgb(model.to_xyz(&cam).unwrap());
        assert!(back.approx_eq(&rgb, 1e-9), "{rgb} -> {back:?}");
    }
}

#[test]
fn test_distance_properties() {
    let model = jmh_model();
    let space = UniformSpace::default();
    let colors = generate_colors(ColorPattern::Random8(23), sizes::TINY * 4);
    let points: Vec<_> = colors
        .iter()
        .map(|&rgb| space.from_cam(jmh_of(&model, rgb)))
        .collect();

    for p in &points {
        assert_eq!(space.distance(p, p), 0.0);
        for q in &points {
            let d = space.distance(p, q);
            assert!((d - space.distance(q, p)).abs() < 1e-12);
            for r in &points {
                assert!(space.distance(p, r) <= d + space.distance(q, r) + 1e-9);
            }
        }
    }
}

#[test]
fn test_one_code_value_is_a_small_difference() {
    let model = jmh_model();
    let space = UniformSpace::default();
    let red = space.from_cam(jmh_of(&model, Rgb::from_u8(255, 0, 0)));
    let near = space.from_cam(jmh_of(&model, Rgb::from_u8(254, 0, 0)));
    let d = space.distance(&red, &near);
    assert!(d > 0.1 && d < 0.5, "{d}");

    let gray = space.from_cam(jmh_of(&model, Rgb::from_u8(128, 128, 128)));
    assert!(space.distance(&red, &gray) > 20.0);
}

#[test]
fn test_spaces_weight_lightness_differently() {
    let model = jmh_model();
    let dark = jmh_of(&model, Rgb::from_u8(100, 100, 100));
    let light = jmh_of(&model, Rgb::from_u8(110, 110, 110));

    let d = |kind| {
        let space = UniformSpace::from_kind(kind);
        space.distance(&space.from_cam(dark), &space.from_cam(light))
    };
    // Pure lightness step: K_L 0.77 < 1.00 < 1.24
    assert!(d(UniformSpaceKind::Lcd) > d(UniformSpaceKind::Ucs));
    assert!(d(UniformSpaceKind::Ucs) > d(UniformSpaceKind::Scd));
}

#[test]
fn test_names() {
    for name in ["lcd", "SCD", "Ucs"] {
        assert!(UniformSpace::from_name(name).is_ok());
    }
    assert!(UniformSpace::from_name("CIELAB").is_err());
    let kind: UniformSpaceKind = "scd".parse().unwrap();
    assert_eq!(kind.to_string(), "SCD");
}
