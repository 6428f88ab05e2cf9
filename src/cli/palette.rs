//! Palette command: print the eleven shades generated from a base color.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::models::{Palette, RgbColor, ShadeKey};
use crate::services::contrast::{label_color, LabelColor};
use crate::services::palette::interpolate;
use clap::Args;
use serde::Serialize;

/// Generate an 11-shade palette from a base color
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base color (#RRGGBB or #RGB)
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of palette output.
#[derive(Debug, Serialize)]
pub struct ShadeOutput {
    shade: ShadeKey,
    hex: RgbColor,
    label: LabelColor,
}

/// JSON output for the palette command.
#[derive(Debug, Serialize)]
pub struct PaletteOutput {
    base: RgbColor,
    shades: Vec<ShadeOutput>,
}

impl PaletteOutput {
    /// Builds output rows from a palette.
    #[must_use]
    pub fn new(palette: &Palette) -> Self {
        Self {
            base: palette.base(),
            shades: palette
                .iter()
                .map(|(shade, hex)| ShadeOutput {
                    shade,
                    hex,
                    label: label_color(hex),
                })
                .collect(),
        }
    }
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.color)?;
        let palette = interpolate(base);
        let output = PaletteOutput::new(&palette);

        if self.json {
            print_json(&output)
        } else {
            print_palette(&output);
            Ok(())
        }
    }
}

fn print_palette(output: &PaletteOutput) {
    println!("Palette for {}", output.base);
    println!();
    for row in &output.shades {
        println!("  {:>3}  {}  label: {}", row.shade.value(), row.hex, row.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_output_rows() {
        let palette = interpolate(RgbColor::new(0x3B, 0x82, 0xF6));
        let output = PaletteOutput::new(&palette);

        assert_eq!(output.base.to_hex(), "#3B82F6");
        assert_eq!(output.shades.len(), 11);
        assert_eq!(output.shades[0].label, LabelColor::Black);
        assert_eq!(output.shades[10].label, LabelColor::White);
    }
}
