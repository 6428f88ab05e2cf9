//! Shadeforge Library
//!
//! This library provides the palette engine behind the Shadeforge CLI:
//! hex/RGB/HSL conversion, 11-shade palette generation, harmony rotation,
//! WCAG contrast evaluation, and the primary/secondary palette store.
//!
//! ```
//! use shadeforge::models::ShadeKey;
//! use shadeforge::services::{contrast_ratio, generate_palette};
//!
//! let palette = generate_palette("#3B82F6").unwrap();
//! let ratio = contrast_ratio(&palette.hex(ShadeKey::S50), &palette.hex(ShadeKey::S950)).unwrap();
//! assert!(ratio > 7.0);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
