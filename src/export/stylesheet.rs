//! Plain CSS and SCSS variable exports.

use crate::models::Palette;
use std::fmt::Write as _;

/// Generates CSS custom properties on `:root`.
#[must_use]
pub fn generate_css(primary: &Palette, secondary: Option<&Palette>) -> String {
    let mut output = String::new();

    output.push_str(":root {\n");
    output.push_str("  /* Primary */\n");
    for (shade, color) in primary.iter() {
        let _ = writeln!(output, "  --color-primary-{shade}: {color};");
    }

    if let Some(secondary) = secondary {
        output.push('\n');
        output.push_str("  /* Secondary */\n");
        for (shade, color) in secondary.iter() {
            let _ = writeln!(output, "  --color-secondary-{shade}: {color};");
        }
    }

    output.push_str("}\n");
    output
}

/// Generates SCSS color variables.
#[must_use]
pub fn generate_scss(primary: &Palette, secondary: Option<&Palette>) -> String {
    let mut output = String::new();

    output.push_str("// Primary\n");
    for (shade, color) in primary.iter() {
        let _ = writeln!(output, "$color-primary-{shade}: {color};");
    }

    if let Some(secondary) = secondary {
        output.push('\n');
        output.push_str("// Secondary\n");
        for (shade, color) in secondary.iter() {
            let _ = writeln!(output, "$color-secondary-{shade}: {color};");
        }
    }

    output
}
