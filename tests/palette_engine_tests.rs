//! Property checks for the palette engine through the public library API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use shadeforge::models::{HarmonyScheme, IdentitySlot, RgbColor, ShadeKey};
use shadeforge::services::contrast::relative_luminance;
use shadeforge::services::{
    contrast_ratio, contrast_yiq, generate_palette, generate_random_color, harmonious_color,
    LabelColor, PaletteStore,
};
use std::collections::BTreeMap;

/// Deterministic sample of colors spread over the RGB cube.
fn sample_colors(count: usize) -> Vec<RgbColor> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..count)
        .map(|_| RgbColor::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

fn channel_distance(a: RgbColor, b: RgbColor) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

// ============================================================================
// Codec
// ============================================================================

#[test]
fn test_hex_round_trip() {
    for color in sample_colors(500) {
        let hex = color.to_hex();
        assert_eq!(RgbColor::from_hex(&hex).unwrap().to_hex(), hex);
    }
}

#[test]
fn test_hsl_round_trip_within_one() {
    for color in sample_colors(2000) {
        let back = RgbColor::from_hsl(color.to_hsl());
        assert!(
            channel_distance(color, back) <= 1,
            "{color} came back as {back}"
        );
    }
}

// ============================================================================
// Palette Generation
// ============================================================================

#[test]
fn test_identity_shade_for_any_base() {
    for color in sample_colors(300) {
        let hex = color.to_hex();
        assert_eq!(generate_palette(&hex).unwrap().hex(ShadeKey::S500), hex);
    }
}

#[test]
fn test_blue_scenario() {
    let palette = generate_palette("#3b82f6").unwrap();

    assert_eq!(palette.hex(ShadeKey::S500), "#3B82F6");
    assert!(palette.get(ShadeKey::S50).to_hsl().l > 0.85);
    assert!(palette.get(ShadeKey::S950).to_hsl().l < 0.15);

    let luminances: Vec<f64> = palette.iter().map(|(_, c)| relative_luminance(c)).collect();
    assert!(luminances.windows(2).all(|w| w[0] > w[1]));

    assert!(contrast_ratio("#3B82F6", "#FFFFFF").unwrap() < 4.5);
    assert!(contrast_ratio("#1E3A8A", "#FFFFFF").unwrap() > 4.5);
}

#[test]
fn test_lightness_monotonic_across_all_shades() {
    for color in sample_colors(2000) {
        let l = color.to_hsl().l;
        if l <= 0.02 || l >= 0.98 {
            continue;
        }
        let palette = generate_palette(&color.to_hex()).unwrap();
        let lightness: Vec<f64> = palette.iter().map(|(_, c)| c.to_hsl().l).collect();
        assert_eq!(lightness.len(), 11);
        assert!(
            lightness.windows(2).all(|w| w[0] >= w[1]),
            "{color}: {lightness:?}"
        );
    }
}

// ============================================================================
// Harmony
// ============================================================================

#[test]
fn test_complementary_twice_restores_hue() {
    for color in sample_colors(200) {
        let hsl = color.to_hsl();
        if hsl.s < 0.2 || hsl.l < 0.1 || hsl.l > 0.9 {
            continue;
        }
        let hex = color.to_hex();
        let once = harmonious_color(&hex, HarmonyScheme::Complementary).unwrap();
        let twice = harmonious_color(&once, HarmonyScheme::Complementary).unwrap();

        let d = (RgbColor::from_hex(&twice).unwrap().to_hsl().h - hsl.h).rem_euclid(360.0);
        assert!(d.min(360.0 - d) <= 1.0, "{hex} -> {once} -> {twice}");
    }
}

// ============================================================================
// Contrast
// ============================================================================

#[test]
fn test_contrast_symmetry_and_bounds() {
    let colors = sample_colors(60);
    for a in &colors {
        for b in &colors {
            let ab = contrast_ratio(&a.to_hex(), &b.to_hex()).unwrap();
            let ba = contrast_ratio(&b.to_hex(), &a.to_hex()).unwrap();
            assert!((ab - ba).abs() < f64::EPSILON);
            assert!((1.0..=21.0).contains(&ab));
        }
        assert!((contrast_ratio(&a.to_hex(), &a.to_hex()).unwrap() - 1.0).abs() < f64::EPSILON);
    }
    assert!((contrast_ratio("#000000", "#FFFFFF").unwrap() - 21.0).abs() < 1e-9);
}

#[test]
fn test_yiq_label_is_separate_from_wcag() {
    // Mid green: WCAG favours black text, YIQ picks a white label
    let on_black = contrast_ratio("#00A000", "#000000").unwrap();
    let on_white = contrast_ratio("#00A000", "#FFFFFF").unwrap();
    assert!(on_black > on_white);
    assert_eq!(contrast_yiq("#00A000").unwrap(), LabelColor::White);
}

#[test]
fn test_random_color_format() {
    let pattern = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
    for _ in 0..200 {
        assert!(pattern.is_match(&generate_random_color()));
    }
}

// ============================================================================
// Store Coordination
// ============================================================================

#[test]
fn test_store_session() {
    let mut store = PaletteStore::default();
    let mut sink = BTreeMap::new();

    // Secondary hidden: secondary variables mirror the primary
    store.apply_to(&mut sink);
    assert_eq!(sink["--color-secondary-500"], "#3B82F6");

    store.set_secondary_visible(true);
    store.set_scheme(HarmonyScheme::Triadic);
    store.set_primary_hex("#FF0000").unwrap();
    assert_eq!(store.secondary().hex(), "#00FF00");

    // Manual secondary edit is dropped on the next primary change
    store.set_secondary_hex("#ABCDEF").unwrap();
    store
        .update_shade(IdentitySlot::Secondary, ShadeKey::S50, "#FFFFFF")
        .unwrap();
    store.set_primary_hex("#0000FF").unwrap();
    assert_eq!(store.secondary().hex(), "#FF0000");
    assert!(store.secondary().overrides().is_empty());

    // Hiding keeps the secondary, primary changes no longer propagate
    store.set_secondary_visible(false);
    store.set_primary_hex("#00FF00").unwrap();
    assert_eq!(store.secondary().hex(), "#FF0000");

    // Showing again while linked catches up with the primary
    store.set_secondary_visible(true);
    assert_eq!(store.secondary().hex(), "#0000FF");

    store.apply_to(&mut sink);
    assert_eq!(sink["--color-primary-500"], "#00FF00");
    assert_eq!(sink["--color-secondary-500"], "#0000FF");
}
