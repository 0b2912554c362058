//! Test color generation
//!
//! Deterministic sets of device colors for sweeping the model. Fixed sets
//! repeat cyclically when more colors are asked for than they hold.

use oxcam_core::Rgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Color set types
#[derive(Debug, Clone, Copy)]
pub enum ColorPattern {
    /// The eight corners of the RGB cube, black first
    CubeCorners,
    /// Evenly spaced neutrals, black to white
    Grayscale,
    /// The six saturated edges of the cube, starting at red
    HueRamp,
    /// Skin tone samples
    SkinTones,
    /// Primaries, secondaries and the saturated tertiaries between them
    GamutBoundary,
    /// Uniform random colors with seed
    Random(u64),
    /// Uniform random 8-bit colors with seed
    Random8(u64),
}

const SKIN_TONES: [u32; 6] = [0xffe0bd, 0xf1c27d, 0xe0ac69, 0xc68642, 0x8d5524, 0x592f2a];

/// Generate `count` colors of a pattern
pub fn generate_colors(pattern: ColorPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        ColorPattern::CubeCorners => (0..count).map(|i| cube_corner(i % 8)).collect(),
        ColorPattern::Grayscale => {
            let last = count.saturating_sub(1).max(1) as f64;
            (0..count)
                .map(|i| {
                    let v = i as f64 / last;
                    Rgb::new(v, v, v)
                })
                .collect()
        }
        ColorPattern::HueRamp => (0..count)
            .map(|i| hexcone_edge(6.0 * i as f64 / count as f64))
            .collect(),
        ColorPattern::SkinTones => SKIN_TONES
            .iter()
            .cycle()
            .take(count)
            .map(|&packed| from_packed(packed))
            .collect(),
        ColorPattern::GamutBoundary => (0..count).map(|i| hexcone_edge((i % 12) as f64 / 2.0)).collect(),
        ColorPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::from_array([(); 3].map(|_| rng.gen_range(0.0..=1.0))))
                .collect()
        }
        ColorPattern::Random8(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| from_packed(rng.gen_range(0..=0xff_ffff)))
                .collect()
        }
    }
}

/// Corner `i` of the cube: bit 2 is red, bit 1 green, bit 0 blue
fn cube_corner(i: usize) -> Rgb {
    let bit = |b: usize| ((i >> b) & 1) as f64;
    Rgb::new(bit(2), bit(1), bit(0))
}

fn from_packed(packed: u32) -> Rgb {
    let [_, r, g, b] = packed.to_be_bytes();
    Rgb::from_u8(r, g, b)
}

/// A point on the saturated hexagon `R → Y → G → C → B → M → R`
///
/// `t` counts edges from red, so `t = 1.0` is yellow and `t = 0.5` orange.
pub fn hexcone_edge(t: f64) -> Rgb {
    let t = t.rem_euclid(6.0);
    let edge = t.floor();
    let f = t - edge;
    let (up, down) = (f, 1.0 - f);
    match edge as u8 {
        0 => Rgb::new(1.0, up, 0.0),
        1 => Rgb::new(down, 1.0, 0.0),
        2 => Rgb::new(0.0, 1.0, up),
        3 => Rgb::new(0.0, down, 1.0),
        4 => Rgb::new(up, 0.0, 1.0),
        _ => Rgb::new(1.0, 0.0, down),
    }
}

/// Standard sample counts
pub mod sizes {
    pub const TINY: usize = 8;
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4096;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_endpoints() {
        let grays = generate_colors(ColorPattern::Grayscale, 5);
        assert_eq!(grays[0], Rgb::BLACK);
        assert_eq!(grays[4], Rgb::WHITE);
        assert_eq!(generate_colors(ColorPattern::Grayscale, 1), vec![Rgb::BLACK]);
    }

    #[test]
    fn test_cube_corners_cycle() {
        let colors = generate_colors(ColorPattern::CubeCorners, 10);
        assert_eq!(colors[0], Rgb::BLACK);
        assert_eq!(colors[7], Rgb::WHITE);
        assert_eq!(colors[4], Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(colors[8], colors[0]);
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_colors(ColorPattern::Random(42), 100);
        let b = generate_colors(ColorPattern::Random(42), 100);
        assert_eq!(a, b);
        assert!(a.iter().all(|c| c.is_in_gamut(0.0)));
    }

    #[test]
    fn test_hexcone_vertices() {
        assert_eq!(hexcone_edge(0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hexcone_edge(1.0), Rgb::new(1.0, 1.0, 0.0));
        assert_eq!(hexcone_edge(3.0), Rgb::new(0.0, 1.0, 1.0));
        assert_eq!(hexcone_edge(0.5), Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(hexcone_edge(6.0), hexcone_edge(0.0));
    }

    #[test]
    fn test_hue_ramp_in_cube() {
        let ramp = generate_colors(ColorPattern::HueRamp, 36);
        assert!(ramp.iter().all(|c| c.is_in_gamut(1e-12)));
        assert_eq!(ramp[0], Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_skin_tones_packed() {
        let tones = generate_colors(ColorPattern::SkinTones, 7);
        assert_eq!(tones[0].to_u8(), [255, 224, 189]);
        assert_eq!(tones[6], tones[0]);
    }
}
