//! Service layer for the palette engine.
//!
//! Pure color math lives in [`palette`], [`harmony`] and [`contrast`].
//! [`store`] coordinates the primary and secondary identities on top of them.

pub mod contrast;
pub mod harmony;
pub mod palette;
pub mod store;

// Re-export commonly used types and functions
pub use contrast::{
    contrast_grid, contrast_ratio, contrast_yiq, ContrastGrid, ContrastView, LabelColor, WcagLevel,
};
pub use harmony::harmonious_color;
pub use palette::{generate_palette, generate_random_color};
pub use store::{CssVariableSink, PaletteStore, StoreChanges, StoreEvent};
