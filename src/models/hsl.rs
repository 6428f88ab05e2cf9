//! HSL color triple.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// A color in HSL space.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are fractions `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0-1.0)
    pub s: f64,
    /// Lightness (0.0-1.0)
    pub l: f64,
}

impl HslColor {
    /// Creates a new HSL triple without normalization.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns this color with the hue rotated by `degrees`, wrapped to `[0, 360)`.
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Returns this color with a different lightness.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Returns this color with saturation clamped to `[0, 1]`.
    #[must_use]
    pub fn with_saturation_clamped(self) -> Self {
        Self {
            s: self.s.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Converts to RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        RgbColor::from_hsl(self)
    }
}

impl From<RgbColor> for HslColor {
    fn from(color: RgbColor) -> Self {
        color.to_hsl()
    }
}
