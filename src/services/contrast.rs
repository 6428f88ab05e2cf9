//! Contrast evaluation.
//!
//! Two separate measures live here and must not be mixed up:
//! - [`contrast_ratio`] is the WCAG relative-luminance ratio behind the
//!   AA/AAA accessibility badges.
//! - [`contrast_yiq`] is the cheap YIQ brightness heuristic used only to
//!   pick a legible black or white label on top of a swatch.
//!
//! Near the YIQ threshold the two can disagree about whether a color is
//! "light" or "dark".

use serde::Serialize;
use std::fmt;

use crate::models::{ColorError, Palette, RgbColor, ShadeKey};

/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;

/// YIQ brightness at or above which a swatch gets a black label.
pub const YIQ_THRESHOLD: f64 = 128.0;

/// Linearizes one sRGB channel (0-255) for luminance computation.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance, 0.0 (black) to 1.0 (white).
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two parsed colors, from 1.0 to 21.0.
#[must_use]
pub fn contrast_ratio_rgb(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors. Symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use shadeforge::services::contrast::contrast_ratio;
///
/// let ratio = contrast_ratio("#000000", "#FFFFFF").unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if either input is malformed.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio_rgb(
        RgbColor::from_hex(hex_a)?,
        RgbColor::from_hex(hex_b)?,
    ))
}

/// Accessibility level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WcagLevel {
    /// Below 3:1
    #[serde(rename = "fail")]
    Fail,
    /// At least 3:1, large text only
    #[serde(rename = "AA-large")]
    AaLarge,
    /// At least 4.5:1, normal text
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1, normal text
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Classifies a contrast ratio.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Aaa
        } else if ratio >= AA_NORMAL {
            Self::Aa
        } else if ratio >= AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA-large",
            Self::Fail => "fail",
        }
    }

    /// Whether normal-size text passes AA.
    #[must_use]
    pub fn passes_aa(self) -> bool {
        self >= Self::Aa
    }

    /// Whether normal-size text passes AAA.
    #[must_use]
    pub fn passes_aaa(self) -> bool {
        self == Self::Aaa
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label color chosen by the YIQ heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    /// Dark label for light swatches
    Black,
    /// Light label for dark swatches
    White,
}

impl LabelColor {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YIQ brightness, `(299R + 587G + 114B) / 1000`, 0-255.
#[must_use]
pub fn yiq(color: RgbColor) -> f64 {
    (299.0 * f64::from(color.r) + 587.0 * f64::from(color.g) + 114.0 * f64::from(color.b))
        / 1000.0
}

/// Picks a legible label color for a swatch of `color`.
#[must_use]
pub fn label_color(color: RgbColor) -> LabelColor {
    if yiq(color) >= YIQ_THRESHOLD {
        LabelColor::Black
    } else {
        LabelColor::White
    }
}

/// Picks a legible label color for a hex swatch.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for malformed hex input.
pub fn contrast_yiq(hex: &str) -> Result<LabelColor, ColorError> {
    Ok(label_color(RgbColor::from_hex(hex)?))
}

/// Which pair of palettes a contrast grid compares (background / text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContrastView {
    /// Primary backgrounds, primary text
    #[default]
    PrimaryPrimary,
    /// Secondary backgrounds, secondary text
    SecondarySecondary,
    /// Primary backgrounds, secondary text
    PrimarySecondary,
    /// Secondary backgrounds, primary text
    SecondaryPrimary,
}

impl ContrastView {
    /// Short name as used on the command line (`p-p`, `s-s`, `p-s`, `s-p`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryPrimary => "p-p",
            Self::SecondarySecondary => "s-s",
            Self::PrimarySecondary => "p-s",
            Self::SecondaryPrimary => "s-p",
        }
    }

    /// Parses a short view name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::PrimaryPrimary,
            Self::SecondarySecondary,
            Self::PrimarySecondary,
            Self::SecondaryPrimary,
        ]
        .into_iter()
        .find(|view| view.as_str() == name.trim())
    }
}

/// One background/text pairing in a contrast grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastCell {
    /// Background shade
    pub background: ShadeKey,
    /// Background color
    pub background_hex: RgbColor,
    /// Text shade
    pub text: ShadeKey,
    /// Text color
    pub text_hex: RgbColor,
    /// Contrast ratio
    pub ratio: f64,
    /// Level reached
    pub level: WcagLevel,
}

/// An 11x11 matrix of contrast ratios, rows are backgrounds, columns are text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastGrid {
    cells: Vec<ContrastCell>,
}

impl ContrastGrid {
    /// Gets the cell for a background/text pair.
    #[must_use]
    pub fn cell(&self, background: ShadeKey, text: ShadeKey) -> &ContrastCell {
        &self.cells[background.index() * ShadeKey::ALL.len() + text.index()]
    }

    /// Iterates rows, one per background shade.
    pub fn rows(&self) -> impl Iterator<Item = &[ContrastCell]> {
        self.cells.chunks(ShadeKey::ALL.len())
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[ContrastCell] {
        &self.cells
    }
}

/// Builds the contrast matrix of every `backgrounds` shade against every `texts` shade.
#[must_use]
pub fn contrast_grid(backgrounds: &Palette, texts: &Palette) -> ContrastGrid {
    let cells = backgrounds
        .iter()
        .flat_map(|(background, bg)| {
            texts.iter().map(move |(text, fg)| {
                let ratio = contrast_ratio_rgb(bg, fg);
                ContrastCell {
                    background,
                    background_hex: bg,
                    text,
                    text_hex: fg,
                    ratio,
                    level: WcagLevel::classify(ratio),
                }
            })
        })
        .collect();

    ContrastGrid { cells }
}
