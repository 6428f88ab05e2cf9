//! Harmony schemes linking a secondary base color to the primary one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue-rotation rule for deriving a companion color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyScheme {
    /// No automatic linkage; generates like `Complementary` when asked directly
    #[default]
    Auto,
    /// Opposite hue (+180°)
    Complementary,
    /// Neighbouring hue (+30°)
    Analogous,
    /// One third of the wheel (+120°)
    Triadic,
    /// Split complementary (+150°)
    Split,
}

impl HarmonyScheme {
    /// All schemes, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Auto,
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Split,
    ];

    /// Hue rotation in degrees. `Auto` rotates like `Complementary`.
    #[must_use]
    pub const fn hue_offset(self) -> f64 {
        match self {
            Self::Auto | Self::Complementary => 180.0,
            Self::Analogous => 30.0,
            Self::Triadic => 120.0,
            Self::Split => 150.0,
        }
    }

    /// Whether this scheme ties the secondary color to the primary one.
    #[must_use]
    pub const fn is_linked(self) -> bool {
        !matches!(self, Self::Auto)
    }

    /// Lowercase name as used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Split => "split",
        }
    }

    /// Parses a scheme name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == name)
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
