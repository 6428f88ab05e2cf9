//! Tailwind theme exports.

use crate::models::Palette;
use std::fmt::Write as _;

/// Generates a `tailwind.config.js` extending the theme colors.
///
/// # Example
///
/// ```
/// use shadeforge::export::generate_tailwind3;
/// use shadeforge::services::generate_palette;
///
/// let primary = generate_palette("#3B82F6").unwrap();
/// let config = generate_tailwind3(&primary, None);
/// assert!(config.contains("'500': '#3B82F6',"));
/// ```
#[must_use]
pub fn generate_tailwind3(primary: &Palette, secondary: Option<&Palette>) -> String {
    let mut output = String::new();

    output.push_str("// tailwind.config.js\n");
    output.push_str("module.exports = {\n");
    output.push_str("  theme: {\n");
    output.push_str("    extend: {\n");
    output.push_str("      colors: {\n");

    write_color_object(&mut output, "primary", primary);
    if let Some(secondary) = secondary {
        output.push_str(",\n");
        write_color_object(&mut output, "secondary", secondary);
    }
    output.push('\n');

    output.push_str("      }\n");
    output.push_str("    }\n");
    output.push_str("  }\n");
    output.push_str("}\n");
    output
}

fn write_color_object(output: &mut String, name: &str, palette: &Palette) {
    let _ = writeln!(output, "        {name}: {{");
    for (shade, color) in palette.iter() {
        let _ = writeln!(output, "          '{shade}': '{color}',");
    }
    output.push_str("        }");
}

/// Generates a Tailwind 4 `@theme` block.
#[must_use]
pub fn generate_tailwind4(primary: &Palette, secondary: Option<&Palette>) -> String {
    let mut output = String::new();

    output.push_str("/* CSS (Tailwind 4 / Main stylesheet) */\n");
    output.push_str("@theme {\n");
    write_theme_variables(&mut output, "primary", primary);
    if let Some(secondary) = secondary {
        write_theme_variables(&mut output, "secondary", secondary);
    }
    output.push_str("}\n");
    output
}

fn write_theme_variables(output: &mut String, name: &str, palette: &Palette) {
    for (shade, color) in palette.iter() {
        let _ = writeln!(output, "  --color-{name}-{shade}: {color};");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    fn gray() -> Palette {
        Palette::uniform(RgbColor::new(0x80, 0x80, 0x80))
    }

    #[test]
    fn test_tailwind3_primary_only() {
        let output = generate_tailwind3(&gray(), None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "// tailwind.config.js");
        assert_eq!(lines[5], "        primary: {");
        assert_eq!(lines[6], "          '50': '#808080',");
        assert_eq!(lines[16], "          '950': '#808080',");
        assert_eq!(lines[17], "        }");
        assert_eq!(lines[18], "      }");
        assert_eq!(lines.len(), 22);
        assert!(!output.contains("secondary"));
    }

    #[test]
    fn test_tailwind3_with_secondary() {
        let secondary = Palette::uniform(RgbColor::new(0xEC, 0x48, 0x99));
        let output = generate_tailwind3(&gray(), Some(&secondary));

        assert!(output.contains("        },\n        secondary: {\n          '50': '#EC4899',"));
        assert!(output.contains("          '950': '#EC4899',\n        }\n      }\n"));
    }

    #[test]
    fn test_tailwind4_block() {
        let output = generate_tailwind4(&gray(), None);

        assert!(output.starts_with("/* CSS (Tailwind 4 / Main stylesheet) */\n@theme {\n"));
        assert!(output.contains("  --color-primary-500: #808080;\n"));
        assert!(output.ends_with("  --color-primary-950: #808080;\n}\n"));
    }

    #[test]
    fn test_tailwind4_with_secondary() {
        let secondary = Palette::uniform(RgbColor::new(0, 0, 0));
        let output = generate_tailwind4(&gray(), Some(&secondary));

        assert_eq!(output.matches("--color-").count(), 22);
        assert!(output.contains("  --color-secondary-50: #000000;\n"));
    }
}
