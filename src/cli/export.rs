//! Export command for writing palettes as stylesheet or config code.

use crate::cli::common::{load_config, CliError, CliResult, PaletteInputs};
use crate::export::{export_palettes, ExportFormat};
use crate::models::ColorIdentity;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Export palettes as Tailwind, CSS, SCSS, or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Primary base color (defaults to the configured primary)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary base color (includes the secondary palette)
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Harmony scheme linking secondary to primary
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Output format: tailwind3, tailwind4, css, scss, json (defaults to config)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output file; use "-" for stdout
    /// (defaults to palette_[format]_[date].[ext] in the configured output directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let format = match &self.format {
            Some(name) => ExportFormat::from_name(name).ok_or_else(|| {
                CliError::validation(format!(
                    "Invalid format '{name}'. Must be one of: tailwind3, tailwind4, css, scss, json"
                ))
            })?,
            None => config.export.format,
        };

        let store = PaletteInputs {
            primary: self.primary.as_deref(),
            secondary: self.secondary.as_deref(),
            scheme: self.scheme.as_deref(),
        }
        .build_store(&config)?;

        let primary = store.primary().palette();
        let secondary = store.visible_secondary().map(ColorIdentity::palette);
        let code = export_palettes(format, &primary, secondary.as_ref())
            .map_err(|e| CliError::io(format!("Failed to generate export: {e:#}")))?;

        let output_path = self.get_output_path(format, config.export.output_dir.as_deref());
        if output_path == Path::new("-") {
            print!("{code}");
            return Ok(());
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        fs::write(&output_path, code)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported {format} palette to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, format: ExportFormat, output_dir: Option<&Path>) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: palette_[format]_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        let file_name = format!("palette_{format}_{date}.{}", format.extension());

        output_dir.map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            primary: None,
            secondary: None,
            scheme: None,
            format: None,
            output,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(None).get_output_path(ExportFormat::Scss, None);

        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("palette_scss_"));
        assert!(path_str.ends_with(".scss"));
    }

    #[test]
    fn test_get_output_path_in_output_dir() {
        let path = args(None).get_output_path(ExportFormat::Tailwind3, Some(Path::new("/tmp/out")));

        assert!(path.starts_with("/tmp/out"));
        assert!(path.to_string_lossy().ends_with(".js"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_export.css");
        let path = args(Some(custom_path.clone())).get_output_path(ExportFormat::Css, None);

        assert_eq!(path, custom_path);
    }
}
