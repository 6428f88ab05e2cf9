//! Text export of resolved palettes.
//!
//! Every format lists all eleven shades of the primary palette, followed by the
//! secondary palette when one is shown. Hex values are always `#RRGGBB` uppercase.

pub mod json;
pub mod stylesheet;
pub mod tailwind;

use crate::models::Palette;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use json::generate_json;
pub use stylesheet::{generate_css, generate_scss};
pub use tailwind::{generate_tailwind3, generate_tailwind4};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `tailwind.config.js` theme extension
    #[default]
    Tailwind3,
    /// Tailwind 4 `@theme` block
    Tailwind4,
    /// Plain CSS custom properties on `:root`
    Css,
    /// SCSS variables
    Scss,
    /// JSON document
    Json,
}

impl ExportFormat {
    /// All formats in display order.
    pub const ALL: [Self; 5] = [
        Self::Tailwind3,
        Self::Tailwind4,
        Self::Css,
        Self::Scss,
        Self::Json,
    ];

    /// Format name as used on the command line and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tailwind3 => "tailwind3",
            Self::Tailwind4 => "tailwind4",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }

    /// Parses a format name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// File extension for exported files.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tailwind3 => "js",
            Self::Tailwind4 | Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders palettes in the given format.
///
/// `secondary` is `None` when no secondary identity is shown.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn export_palettes(
    format: ExportFormat,
    primary: &Palette,
    secondary: Option<&Palette>,
) -> Result<String> {
    let output = match format {
        ExportFormat::Tailwind3 => generate_tailwind3(primary, secondary),
        ExportFormat::Tailwind4 => generate_tailwind4(primary, secondary),
        ExportFormat::Css => generate_css(primary, secondary),
        ExportFormat::Scss => generate_scss(primary, secondary),
        ExportFormat::Json => generate_json(primary, secondary)?,
    };
    tracing::debug!(%format, bytes = output.len(), "Exported palettes");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShadeKey;
    use crate::services::palette::generate_palette;

    #[test]
    fn test_format_names() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_name(format.as_str()), Some(format));
        }
        assert_eq!(ExportFormat::from_name("SCSS"), Some(ExportFormat::Scss));
        assert_eq!(ExportFormat::from_name("less"), None);
        assert_eq!(ExportFormat::default(), ExportFormat::Tailwind3);
    }

    #[test]
    fn test_every_format_lists_every_shade() {
        let primary = generate_palette("#3b82f6").unwrap();
        let secondary = generate_palette("#EC4899").unwrap();

        for format in ExportFormat::ALL {
            let output = export_palettes(format, &primary, Some(&secondary)).unwrap();
            for shade in ShadeKey::ALL {
                assert!(
                    output.contains(&primary.hex(shade)),
                    "{format} missing primary {shade}"
                );
                assert!(
                    output.contains(&secondary.hex(shade)),
                    "{format} missing secondary {shade}"
                );
            }
            assert!(output.contains("#3B82F6"));
            assert!(!output.contains("#3b82f6"));
        }
    }

    #[test]
    fn test_hidden_secondary_is_omitted() {
        let primary = generate_palette("#3B82F6").unwrap();
        for format in ExportFormat::ALL {
            let output = export_palettes(format, &primary, None).unwrap();
            assert!(!output.contains("secondary"), "{format} leaked secondary");
        }
    }
}
