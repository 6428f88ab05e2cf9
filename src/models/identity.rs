//! Color identities: a named base color plus its palette and manual edits.

use std::collections::BTreeMap;
use std::fmt;

use super::{Palette, RgbColor, ShadeKey};

/// Which of the two tracked identities an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentitySlot {
    /// The always-present identity
    Primary,
    /// The optional companion identity
    Secondary,
}

impl IdentitySlot {
    /// Lowercase name, also used in CSS variable names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Parses a slot name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }
}

impl fmt::Display for IdentitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named base color and the palette derived from it.
///
/// The generated palette is supplied by the caller alongside the base. Per-shade
/// edits live in a separate override layer that is dropped whenever the base
/// changes, so a stale edit can never outlive the scale it was made on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorIdentity {
    name: String,
    base: RgbColor,
    generated: Palette,
    overrides: BTreeMap<ShadeKey, RgbColor>,
}

impl ColorIdentity {
    /// Creates an identity from a base color and the palette generated for it.
    pub fn new(name: impl Into<String>, base: RgbColor, generated: Palette) -> Self {
        Self {
            name: name.into(),
            base,
            generated,
            overrides: BTreeMap::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base color (shade 500 of the generated palette).
    #[must_use]
    pub const fn base(&self) -> RgbColor {
        self.base
    }

    /// Base color as `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        self.base.to_hex()
    }

    /// The palette as generated from the base, ignoring manual edits.
    #[must_use]
    pub const fn generated(&self) -> &Palette {
        &self.generated
    }

    /// The effective palette: generated shades with manual edits on top.
    #[must_use]
    pub fn palette(&self) -> Palette {
        let mut palette = self.generated;
        for (shade, color) in &self.overrides {
            palette.set(*shade, *color);
        }
        palette
    }

    /// Manually edited shades.
    #[must_use]
    pub const fn overrides(&self) -> &BTreeMap<ShadeKey, RgbColor> {
        &self.overrides
    }

    /// Whether a shade currently carries a manual edit.
    #[must_use]
    pub fn is_overridden(&self, shade: ShadeKey) -> bool {
        self.overrides.contains_key(&shade)
    }

    /// Replaces the base color and its generated palette, dropping all edits.
    pub fn set_base(&mut self, base: RgbColor, generated: Palette) {
        self.base = base;
        self.generated = generated;
        self.overrides.clear();
    }

    /// Manually sets one shade without touching the rest of the palette.
    pub fn override_shade(&mut self, shade: ShadeKey, color: RgbColor) {
        self.overrides.insert(shade, color);
    }

    /// Drops all manual edits, restoring the generated palette.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(hex: &str) -> ColorIdentity {
        let base = RgbColor::from_hex(hex).unwrap();
        ColorIdentity::new("Primary", base, Palette::uniform(base))
    }

    #[test]
    fn test_new_keeps_generated_palette() {
        let identity = identity("#3b82f6");
        assert_eq!(identity.name(), "Primary");
        assert_eq!(identity.hex(), "#3B82F6");
        assert_eq!(identity.palette(), Palette::uniform(RgbColor::new(59, 130, 246)));
        assert!(identity.overrides().is_empty());
    }

    #[test]
    fn test_override_only_touches_one_shade() {
        let mut identity = identity("#3B82F6");
        let before = identity.palette();

        identity.override_shade(ShadeKey::S200, RgbColor::new(1, 2, 3));

        let after = identity.palette();
        assert_eq!(after.get(ShadeKey::S200), RgbColor::new(1, 2, 3));
        assert!(identity.is_overridden(ShadeKey::S200));
        for shade in ShadeKey::ALL.into_iter().filter(|s| *s != ShadeKey::S200) {
            assert_eq!(after.get(shade), before.get(shade));
        }
        assert_eq!(identity.generated(), &before);
    }

    #[test]
    fn test_base_change_discards_overrides() {
        let mut identity = identity("#3B82F6");
        identity.override_shade(ShadeKey::S900, RgbColor::new(0, 0, 0));

        let pink = RgbColor::from_hex("#EC4899").unwrap();
        identity.set_base(pink, Palette::uniform(pink));

        assert!(identity.overrides().is_empty());
        assert_eq!(identity.hex(), "#EC4899");
        assert_eq!(identity.palette(), Palette::uniform(pink));
    }

    #[test]
    fn test_clear_overrides() {
        let mut identity = identity("#3B82F6");
        identity.override_shade(ShadeKey::S50, RgbColor::new(9, 9, 9));
        identity.clear_overrides();
        assert_eq!(identity.palette(), *identity.generated());
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(IdentitySlot::from_name("Secondary"), Some(IdentitySlot::Secondary));
        assert_eq!(IdentitySlot::from_name("tertiary"), None);
        assert_eq!(IdentitySlot::Primary.to_string(), "primary");
    }
}
