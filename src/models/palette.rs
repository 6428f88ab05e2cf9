//! Palette data structure: eleven shades keyed 50 through 950.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

use super::{RgbColor, ShadeKey};

/// A fixed-size scale of eleven colors, one per [`ShadeKey`].
///
/// Serializes as an object keyed by shade number (`{"50": "#EFF6FF", ...}`)
/// in ascending shade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BTreeMap<u16, RgbColor>", try_from = "BTreeMap<u16, RgbColor>")]
pub struct Palette {
    shades: [RgbColor; 11],
}

impl Palette {
    /// Creates a palette from colors ordered 50 through 950.
    #[must_use]
    pub const fn from_shades(shades: [RgbColor; 11]) -> Self {
        Self { shades }
    }

    /// Creates a palette where every shade is `color`.
    #[must_use]
    pub const fn uniform(color: RgbColor) -> Self {
        Self { shades: [color; 11] }
    }

    /// Gets the color for a shade.
    #[must_use]
    pub const fn get(&self, shade: ShadeKey) -> RgbColor {
        self.shades[shade.index()]
    }

    /// Gets the `#RRGGBB` string for a shade.
    #[must_use]
    pub fn hex(&self, shade: ShadeKey) -> String {
        self.get(shade).to_hex()
    }

    /// Replaces the color for a shade.
    pub fn set(&mut self, shade: ShadeKey, color: RgbColor) {
        self.shades[shade.index()] = color;
    }

    /// The identity shade (500).
    #[must_use]
    pub const fn base(&self) -> RgbColor {
        self.get(ShadeKey::S500)
    }

    /// Iterates `(shade, color)` pairs from 50 to 950.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, RgbColor)> + '_ {
        ShadeKey::ALL.into_iter().map(move |shade| (shade, self.get(shade)))
    }
}

impl Index<ShadeKey> for Palette {
    type Output = RgbColor;

    fn index(&self, shade: ShadeKey) -> &Self::Output {
        &self.shades[shade.index()]
    }
}

impl From<Palette> for BTreeMap<u16, RgbColor> {
    fn from(palette: Palette) -> Self {
        palette.iter().map(|(shade, color)| (shade.value(), color)).collect()
    }
}

impl TryFrom<BTreeMap<u16, RgbColor>> for Palette {
    type Error = String;

    fn try_from(map: BTreeMap<u16, RgbColor>) -> Result<Self, Self::Error> {
        if let Some(unknown) = map.keys().find(|k| ShadeKey::from_value(**k).is_none()) {
            return Err(format!("Unknown shade '{unknown}' in palette"));
        }

        let mut shades = [RgbColor::default(); 11];
        for shade in ShadeKey::ALL {
            shades[shade.index()] = *map
                .get(&shade.value())
                .ok_or_else(|| format!("Palette is missing shade '{shade}'"))?;
        }

        Ok(Self { shades })
    }
}
