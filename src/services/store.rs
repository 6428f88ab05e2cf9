//! Primary/secondary identity coordination.
//!
//! [`PaletteStore`] holds the two identities plus the UI state that decides
//! whether a secondary identity is shown and whether it follows a harmony
//! scheme. Every mutation goes through [`PaletteStore::dispatch`], which looks
//! up the effects of an event in [`transition`] and applies them in order.
//!
//! While linked, the secondary base is a projection of the primary: a manual
//! secondary edit sticks only until the next primary change.

use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use super::contrast::{contrast_grid, ContrastGrid, ContrastView};
use super::harmony;
use super::palette::{interpolate, random_rgb};
use crate::models::{
    ColorError, ColorIdentity, HarmonyScheme, IdentitySlot, Palette, RgbColor, ShadeKey,
};

/// Default primary base color (blue-500).
pub const DEFAULT_PRIMARY: RgbColor = RgbColor::new(0x3B, 0x82, 0xF6);

/// Default secondary base color (pink-500).
pub const DEFAULT_SECONDARY: RgbColor = RgbColor::new(0xEC, 0x48, 0x99);

/// Whether the secondary identity is tied to the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// `auto` scheme: the secondary is edited freely
    Independent,
    /// Any other scheme: the secondary follows the primary
    Linked(HarmonyScheme),
}

impl LinkMode {
    /// Link mode implied by a scheme.
    #[must_use]
    pub const fn from_scheme(scheme: HarmonyScheme) -> Self {
        if scheme.is_linked() {
            Self::Linked(scheme)
        } else {
            Self::Independent
        }
    }
}

/// An input to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The primary base color was set
    SetPrimary(RgbColor),
    /// The secondary base color was set directly
    SetSecondary(RgbColor),
    /// The harmony scheme was changed
    SetScheme(HarmonyScheme),
    /// The secondary identity was shown or hidden
    SetSecondaryVisible(bool),
    /// One shade was edited by hand
    EditShade {
        /// Identity being edited
        slot: IdentitySlot,
        /// Shade being edited
        shade: ShadeKey,
        /// New color for the shade
        color: RgbColor,
    },
}

/// A single state change produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Replace an identity's base and regenerate its palette
    Rebase(IdentitySlot, RgbColor),
    /// Store a new harmony scheme
    StoreScheme(HarmonyScheme),
    /// Store secondary visibility
    StoreVisibility(bool),
    /// Write one shade into an identity's override layer
    Override(IdentitySlot, ShadeKey, RgbColor),
    /// Recompute the secondary base from the primary under the current scheme
    FollowHarmony,
}

/// The transition table.
///
/// `mode` and `has_secondary` describe the state before the event.
/// Harmony is re-applied when the primary changes while linked and visible,
/// and when an event moves the store into the linked-and-visible state.
#[must_use]
pub fn transition(mode: LinkMode, has_secondary: bool, event: StoreEvent) -> Vec<Effect> {
    use Effect::{FollowHarmony, Override, Rebase, StoreScheme, StoreVisibility};

    match (event, mode, has_secondary) {
        (StoreEvent::SetPrimary(c), LinkMode::Linked(_), true) => {
            vec![Rebase(IdentitySlot::Primary, c), FollowHarmony]
        }
        (StoreEvent::SetPrimary(c), _, _) => vec![Rebase(IdentitySlot::Primary, c)],

        (StoreEvent::SetSecondary(c), _, _) => vec![Rebase(IdentitySlot::Secondary, c)],

        (StoreEvent::SetScheme(s), _, true) if s.is_linked() => {
            vec![StoreScheme(s), FollowHarmony]
        }
        (StoreEvent::SetScheme(s), _, _) => vec![StoreScheme(s)],

        (StoreEvent::SetSecondaryVisible(true), LinkMode::Linked(_), false) => {
            vec![StoreVisibility(true), FollowHarmony]
        }
        (StoreEvent::SetSecondaryVisible(v), _, _) => vec![StoreVisibility(v)],

        (StoreEvent::EditShade { slot, shade, color }, _, _) => {
            vec![Override(slot, shade, color)]
        }
    }
}

/// What a dispatched event actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreChanges {
    /// The primary palette was regenerated
    pub primary_regenerated: bool,
    /// The secondary palette was regenerated
    pub secondary_regenerated: bool,
    /// A shade override was written
    pub shade_edited: bool,
}

/// Destination for CSS custom properties, e.g. a document style root.
pub trait CssVariableSink {
    /// Sets one custom property.
    fn set_property(&mut self, name: &str, value: &str);
}

impl CssVariableSink for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// CSS custom property name for a shade, e.g. `--color-primary-500`.
#[must_use]
pub fn css_variable_name(slot: IdentitySlot, shade: ShadeKey) -> String {
    format!("--color-{}-{}", slot.as_str(), shade.value())
}

/// Primary and secondary identities plus harmony/visibility state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    primary: ColorIdentity,
    secondary: ColorIdentity,
    has_secondary: bool,
    scheme: HarmonyScheme,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, DEFAULT_SECONDARY)
    }
}

impl PaletteStore {
    /// Creates a store with the secondary hidden and no harmony link.
    #[must_use]
    pub fn new(primary: RgbColor, secondary: RgbColor) -> Self {
        Self {
            primary: ColorIdentity::new("Primary", primary, interpolate(primary)),
            secondary: ColorIdentity::new("Secondary", secondary, interpolate(secondary)),
            has_secondary: false,
            scheme: HarmonyScheme::Auto,
        }
    }

    /// The primary identity.
    #[must_use]
    pub const fn primary(&self) -> &ColorIdentity {
        &self.primary
    }

    /// The secondary identity, whether or not it is visible.
    #[must_use]
    pub const fn secondary(&self) -> &ColorIdentity {
        &self.secondary
    }

    /// The secondary identity if it is visible.
    #[must_use]
    pub const fn visible_secondary(&self) -> Option<&ColorIdentity> {
        if self.has_secondary {
            Some(&self.secondary)
        } else {
            None
        }
    }

    /// Looks up an identity by slot.
    #[must_use]
    pub const fn identity(&self, slot: IdentitySlot) -> &ColorIdentity {
        match slot {
            IdentitySlot::Primary => &self.primary,
            IdentitySlot::Secondary => &self.secondary,
        }
    }

    fn identity_mut(&mut self, slot: IdentitySlot) -> &mut ColorIdentity {
        match slot {
            IdentitySlot::Primary => &mut self.primary,
            IdentitySlot::Secondary => &mut self.secondary,
        }
    }

    /// Whether the secondary identity is shown.
    #[must_use]
    pub const fn has_secondary(&self) -> bool {
        self.has_secondary
    }

    /// Current harmony scheme.
    #[must_use]
    pub const fn scheme(&self) -> HarmonyScheme {
        self.scheme
    }

    /// Current link mode.
    #[must_use]
    pub const fn link_mode(&self) -> LinkMode {
        LinkMode::from_scheme(self.scheme)
    }

    /// Applies an event through the transition table.
    pub fn dispatch(&mut self, event: StoreEvent) -> StoreChanges {
        let effects = transition(self.link_mode(), self.has_secondary, event);
        debug!(?event, ?effects, "Store transition");

        let mut changes = StoreChanges::default();
        for effect in effects {
            self.apply_effect(effect, &mut changes);
        }
        changes
    }

    fn apply_effect(&mut self, effect: Effect, changes: &mut StoreChanges) {
        match effect {
            Effect::Rebase(slot, color) => {
                self.identity_mut(slot).set_base(color, interpolate(color));
                match slot {
                    IdentitySlot::Primary => changes.primary_regenerated = true,
                    IdentitySlot::Secondary => changes.secondary_regenerated = true,
                }
            }
            Effect::StoreScheme(scheme) => self.scheme = scheme,
            Effect::StoreVisibility(visible) => self.has_secondary = visible,
            Effect::Override(slot, shade, color) => {
                self.identity_mut(slot).override_shade(shade, color);
                changes.shade_edited = true;
            }
            Effect::FollowHarmony => {
                let target = harmony::rotate(self.primary.base(), self.scheme);
                if target != self.secondary.base() {
                    debug!(secondary = %target, scheme = %self.scheme, "Secondary follows primary");
                    self.secondary.set_base(target, interpolate(target));
                    changes.secondary_regenerated = true;
                }
            }
        }
    }

    /// Sets the primary base from hex.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for malformed hex input.
    pub fn set_primary_hex(&mut self, hex: &str) -> Result<StoreChanges, ColorError> {
        Ok(self.dispatch(StoreEvent::SetPrimary(RgbColor::from_hex(hex)?)))
    }

    /// Sets the secondary base from hex.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for malformed hex input.
    pub fn set_secondary_hex(&mut self, hex: &str) -> Result<StoreChanges, ColorError> {
        Ok(self.dispatch(StoreEvent::SetSecondary(RgbColor::from_hex(hex)?)))
    }

    /// Changes the harmony scheme.
    pub fn set_scheme(&mut self, scheme: HarmonyScheme) -> StoreChanges {
        self.dispatch(StoreEvent::SetScheme(scheme))
    }

    /// Shows or hides the secondary identity. Hiding keeps its state.
    pub fn set_secondary_visible(&mut self, visible: bool) -> StoreChanges {
        self.dispatch(StoreEvent::SetSecondaryVisible(visible))
    }

    /// Edits one shade of an identity's palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for malformed hex input.
    pub fn update_shade(
        &mut self,
        slot: IdentitySlot,
        shade: ShadeKey,
        hex: &str,
    ) -> Result<StoreChanges, ColorError> {
        let color = RgbColor::from_hex(hex)?;
        Ok(self.dispatch(StoreEvent::EditShade { slot, shade, color }))
    }

    /// Sets the primary base to a random color.
    pub fn randomize_primary<R: Rng>(&mut self, rng: &mut R) -> StoreChanges {
        self.dispatch(StoreEvent::SetPrimary(random_rgb(rng)))
    }

    /// Writes every shade as a CSS custom property.
    ///
    /// Secondary variables mirror the primary palette while no secondary is shown.
    pub fn apply_to<S: CssVariableSink + ?Sized>(&self, sink: &mut S) {
        let primary = self.primary.palette();
        let secondary = self
            .visible_secondary()
            .map_or(primary, ColorIdentity::palette);

        for (slot, palette) in [
            (IdentitySlot::Primary, primary),
            (IdentitySlot::Secondary, secondary),
        ] {
            for (shade, color) in palette.iter() {
                sink.set_property(&css_variable_name(slot, shade), &color.to_hex());
            }
        }
    }

    /// Palettes for a contrast view as `(backgrounds, texts)`.
    ///
    /// Every view falls back to primary/primary while no secondary is shown.
    #[must_use]
    pub fn view_palettes(&self, view: ContrastView) -> (Palette, Palette) {
        let primary = self.primary.palette();
        let Some(secondary) = self.visible_secondary().map(ColorIdentity::palette) else {
            return (primary, primary);
        };

        match view {
            ContrastView::PrimaryPrimary => (primary, primary),
            ContrastView::SecondarySecondary => (secondary, secondary),
            ContrastView::PrimarySecondary => (primary, secondary),
            ContrastView::SecondaryPrimary => (secondary, primary),
        }
    }

    /// Contrast matrix for a view.
    #[must_use]
    pub fn contrast_grid(&self, view: ContrastView) -> ContrastGrid {
        let (backgrounds, texts) = self.view_palettes(view);
        contrast_grid(&backgrounds, &texts)
    }
}
