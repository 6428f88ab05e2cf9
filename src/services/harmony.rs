//! Harmony generation: rotate a base hue to derive a companion color.

use tracing::debug;

use crate::models::{ColorError, HarmonyScheme, RgbColor};

/// Rotates `base` by the scheme's hue offset, keeping saturation and lightness.
#[must_use]
pub fn rotate(base: RgbColor, scheme: HarmonyScheme) -> RgbColor {
    base.to_hsl().rotate_hue(scheme.hue_offset()).to_rgb()
}

/// Returns the harmonious companion of `hex` under `scheme` as `#RRGGBB`.
///
/// `Auto` behaves as `Complementary`.
///
/// # Examples
///
/// ```
/// use shadeforge::models::HarmonyScheme;
/// use shadeforge::services::harmony::harmonious_color;
///
/// let companion = harmonious_color("#FF0000", HarmonyScheme::Complementary).unwrap();
/// assert_eq!(companion, "#00FFFF");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for malformed hex input.
pub fn harmonious_color(hex: &str, scheme: HarmonyScheme) -> Result<String, ColorError> {
    let base = RgbColor::from_hex(hex)?;
    let companion = rotate(base, scheme);
    debug!(base = %base, %scheme, companion = %companion, "Computed harmonious color");
    Ok(companion.to_hex())
}

/// Companion colors for every linked scheme, in menu order.
#[must_use]
pub fn all_harmonies(base: RgbColor) -> Vec<(HarmonyScheme, RgbColor)> {
    HarmonyScheme::ALL
        .into_iter()
        .filter(|scheme| scheme.is_linked())
        .map(|scheme| (scheme, rotate(base, scheme)))
        .collect()
}
