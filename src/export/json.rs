//! JSON export.

use crate::models::Palette;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct PaletteDocument<'a> {
    primary: &'a Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<&'a Palette>,
}

/// Generates a pretty-printed JSON document keyed by identity then shade.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn generate_json(primary: &Palette, secondary: Option<&Palette>) -> Result<String> {
    let document = PaletteDocument { primary, secondary };
    let mut output =
        serde_json::to_string_pretty(&document).context("Failed to serialize palettes")?;
    output.push('\n');
    Ok(output)
}
