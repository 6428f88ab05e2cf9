//! Data models for colors, palettes, and color identities.
//!
//! These are plain values: conversions are pure and nothing here performs I/O.

pub mod error;
pub mod harmony;
pub mod hsl;
pub mod identity;
pub mod palette;
pub mod rgb;
pub mod shade;

// Re-export all model types
pub use error::ColorError;
pub use harmony::HarmonyScheme;
pub use hsl::HslColor;
pub use identity::{ColorIdentity, IdentitySlot};
pub use palette::Palette;
pub use rgb::RgbColor;
pub use shade::{ShadeKey, ShadeRange};
