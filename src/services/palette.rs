//! Shade interpolation: one base color in, an 11-step palette out.
//!
//! Lighter shades walk lightness from near-white toward the base, darker
//! shades walk from the base toward near-black. Hue and saturation stay
//! fixed across the scale, and shade 500 is the parsed base itself, never a
//! value that went through HSL.

use rand::Rng;
use tracing::debug;

use crate::models::{ColorError, Palette, RgbColor, ShadeKey, ShadeRange};

/// Lightness the light side interpolates from.
pub const LIGHT_ANCHOR: f64 = 0.98;

/// Lightness the dark side interpolates toward.
pub const DARK_ANCHOR: f64 = 0.02;

/// Interpolation fraction for a shade within its side of the scale.
///
/// Light side: 0 is near-white, 1 is the base. Dark side: 0 is the base,
/// 1 is near-black. Returns `None` for the base shade.
#[must_use]
pub const fn interpolation_fraction(shade: ShadeKey) -> Option<f64> {
    match shade {
        ShadeKey::S50 => Some(0.1),
        ShadeKey::S100 => Some(0.25),
        ShadeKey::S200 => Some(0.45),
        ShadeKey::S300 => Some(0.65),
        ShadeKey::S400 => Some(0.85),
        ShadeKey::S500 => None,
        ShadeKey::S600 => Some(0.2),
        ShadeKey::S700 => Some(0.4),
        ShadeKey::S800 => Some(0.6),
        ShadeKey::S900 => Some(0.8),
        ShadeKey::S950 => Some(0.9),
    }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Target lightness of `shade` for a base of lightness `base_l`.
#[must_use]
pub fn shade_lightness(shade: ShadeKey, base_l: f64) -> f64 {
    match (shade.range(), interpolation_fraction(shade)) {
        (ShadeRange::Light, Some(t)) => lerp(LIGHT_ANCHOR, base_l, t),
        (ShadeRange::Dark, Some(t)) => lerp(base_l, DARK_ANCHOR, t),
        _ => base_l,
    }
}

/// Builds the palette for an already-parsed base color.
#[must_use]
pub fn interpolate(base: RgbColor) -> Palette {
    let hsl = base.to_hsl();
    let anchor = hsl.with_saturation_clamped();

    let mut palette = Palette::uniform(base);
    for shade in ShadeKey::ALL {
        if shade.range() == ShadeRange::Base {
            continue;
        }
        let color = anchor.with_lightness(shade_lightness(shade, hsl.l)).to_rgb();
        palette.set(shade, color);
    }

    palette
}

/// Generates the full 11-shade palette for a hex color.
///
/// Shade 500 equals the input, normalized to uppercase `#RRGGBB`.
///
/// # Examples
///
/// ```
/// use shadeforge::models::ShadeKey;
/// use shadeforge::services::palette::generate_palette;
///
/// let palette = generate_palette("#3b82f6").unwrap();
/// assert_eq!(palette.hex(ShadeKey::S500), "#3B82F6");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for malformed hex input.
pub fn generate_palette(hex: &str) -> Result<Palette, ColorError> {
    let base = RgbColor::from_hex(hex)?;
    let palette = interpolate(base);
    debug!(
        base = %base,
        lightest = %palette.get(ShadeKey::S50),
        darkest = %palette.get(ShadeKey::S950),
        "Generated palette"
    );
    Ok(palette)
}

/// Returns a random `#RRGGBB` color using the thread-local generator.
#[must_use]
pub fn generate_random_color() -> String {
    generate_random_color_with(&mut rand::rng())
}

/// Returns a random `#RRGGBB` color, sampling each hex digit independently.
pub fn generate_random_color_with<R: Rng>(rng: &mut R) -> String {
    random_rgb(rng).to_hex()
}

/// Samples a random color one hex digit at a time.
pub fn random_rgb<R: Rng>(rng: &mut R) -> RgbColor {
    let mut channel = || rng.random_range(0..16u8) * 16 + rng.random_range(0..16u8);
    RgbColor::new(channel(), channel(), channel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::contrast::relative_luminance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    #[test]
    fn test_identity_shade_is_exact() {
        for hex in ["#3B82F6", "#EC4899", "#000000", "#FFFFFF", "#010203", "#7F7F80"] {
            let palette = generate_palette(hex).unwrap();
            assert_eq!(palette.hex(ShadeKey::S500), hex);
        }
    }

    #[test]
    fn test_identity_shade_normalizes_case_and_shorthand() {
        let palette = generate_palette("#3b82f6").unwrap();
        assert_eq!(palette.hex(ShadeKey::S500), "#3B82F6");

        let palette = generate_palette("abc").unwrap();
        assert_eq!(palette.hex(ShadeKey::S500), "#AABBCC");
    }

    #[test]
    fn test_blue_scale_endpoints() {
        let palette = generate_palette("#3b82f6").unwrap();

        let lightest = palette.get(ShadeKey::S50).to_hsl();
        assert!(lightest.l > 0.9, "50 should be a near-white tint, got {}", lightest.l);

        let darkest = palette.get(ShadeKey::S950).to_hsl();
        assert!(darkest.l < 0.1, "950 should be near-black, got {}", darkest.l);
    }

    #[test]
    fn test_blue_scale_luminance_strictly_decreasing() {
        let palette = generate_palette("#3B82F6").unwrap();
        let luminances: Vec<f64> = palette.iter().map(|(_, c)| relative_luminance(c)).collect();

        for pair in luminances.windows(2) {
            assert!(pair[0] > pair[1], "luminance not decreasing: {luminances:?}");
        }
    }

    #[test]
    fn test_lightness_non_increasing_for_midtones() {
        for hex in ["#EC4899", "#10B981", "#F59E0B", "#6B7280", "#0F172A", "#FDE68A"] {
            let palette = generate_palette(hex).unwrap();
            let lightness: Vec<f64> = palette.iter().map(|(_, c)| c.to_hsl().l).collect();
            for pair in lightness.windows(2) {
                assert!(pair[0] >= pair[1], "{hex}: lightness increased: {lightness:?}");
            }
        }
    }

    #[test]
    fn test_hue_held_across_scale() {
        let base_hue = RgbColor::from_hex("#3B82F6").unwrap().to_hsl().h;
        let palette = generate_palette("#3B82F6").unwrap();

        for (shade, color) in palette.iter() {
            let hue = color.to_hsl().h;
            assert!(
                (hue - base_hue).abs() < 3.0,
                "shade {shade} drifted to hue {hue} from {base_hue}"
            );
        }
    }

    #[test]
    fn test_gray_base_gives_neutral_scale() {
        let palette = generate_palette("#808080").unwrap();
        for (shade, color) in palette.iter() {
            assert!(
                color.r == color.g && color.g == color.b,
                "shade {shade} is not neutral: {color}"
            );
        }
    }

    #[test]
    fn test_degenerate_bases_do_not_fail() {
        let black = generate_palette("#000000").unwrap();
        assert_eq!(black.hex(ShadeKey::S500), "#000000");
        assert!(black.get(ShadeKey::S50).to_hsl().l > 0.85);

        let white = generate_palette("#FFFFFF").unwrap();
        assert_eq!(white.hex(ShadeKey::S500), "#FFFFFF");
        assert!(white.get(ShadeKey::S950).to_hsl().l < 0.15);
    }

    #[test]
    fn test_shade_lightness_anchors() {
        assert!((shade_lightness(ShadeKey::S50, 0.5) - 0.932).abs() < 1e-9);
        assert!((shade_lightness(ShadeKey::S950, 0.5) - 0.068).abs() < 1e-9);
        assert!((shade_lightness(ShadeKey::S500, 0.42) - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert_eq!(
            generate_palette("#12345G"),
            Err(ColorError::invalid_format("#12345G"))
        );
        assert!(generate_palette("blue").is_err());
    }

    #[test]
    fn test_random_color_format() {
        let pattern = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = generate_random_color_with(&mut rng);
            assert!(pattern.is_match(&color), "bad random color {color}");
        }
        assert!(pattern.is_match(&generate_random_color()));
    }

    #[test]
    fn test_random_color_is_seed_deterministic() {
        let a = generate_random_color_with(&mut StdRng::seed_from_u64(42));
        let b = generate_random_color_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_rgb_matches_hex_generator() {
        let color = random_rgb(&mut StdRng::seed_from_u64(11));
        let hex = generate_random_color_with(&mut StdRng::seed_from_u64(11));
        assert_eq!(color.to_hex(), hex);
    }
}
