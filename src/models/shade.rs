//! The eleven canonical shade steps of a palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eleven lightness steps, `50` (lightest) to `950` (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ShadeKey {
    /// Shade 50
    S50,
    /// Shade 100
    S100,
    /// Shade 200
    S200,
    /// Shade 300
    S300,
    /// Shade 400
    S400,
    /// Shade 500, the base color
    S500,
    /// Shade 600
    S600,
    /// Shade 700
    S700,
    /// Shade 800
    S800,
    /// Shade 900
    S900,
    /// Shade 950
    S950,
}

/// Where a shade sits relative to the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeRange {
    /// Interpolated between near-white and the base
    Light,
    /// The base color itself
    Base,
    /// Interpolated between the base and near-black
    Dark,
}

impl ShadeKey {
    /// All shades in ascending order.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The numeric shade value (50, 100, ..., 950).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Looks up a shade by its numeric value.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.value() == value)
    }

    /// Position in [`ShadeKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Which side of the base this shade is generated on.
    #[must_use]
    pub const fn range(self) -> ShadeRange {
        match self {
            Self::S50 | Self::S100 | Self::S200 | Self::S300 | Self::S400 => ShadeRange::Light,
            Self::S500 => ShadeRange::Base,
            Self::S600 | Self::S700 | Self::S800 | Self::S900 | Self::S950 => ShadeRange::Dark,
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<ShadeKey> for u16 {
    fn from(shade: ShadeKey) -> Self {
        shade.value()
    }
}

impl TryFrom<u16> for ShadeKey {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Unknown shade '{value}'"))
    }
}

impl std::str::FromStr for ShadeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| {
                format!("Unknown shade '{s}'. Expected one of 50, 100, 200, ..., 900, 950")
            })
    }
}
