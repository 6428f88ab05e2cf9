//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_color, parse_scheme, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::ExportFormat;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default primary color
    #[arg(long, value_name = "HEX")]
    primary: Option<String>,

    /// Default secondary color
    #[arg(long, value_name = "HEX")]
    secondary: Option<String>,

    /// Default harmony scheme (auto, complementary, analogous, triadic, split)
    #[arg(long, value_name = "SCHEME")]
    scheme: Option<String>,

    /// Default export format (tailwind3, tailwind4, css, scss, json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Directory for exported files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    palette: PaletteOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    primary: String,
    secondary: String,
    scheme: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.primary.is_none()
            && self.secondary.is_none()
            && self.scheme.is_none()
            && self.format.is_none()
            && self.output_dir.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --primary, --secondary, --scheme, --format, or --output-dir",
            ));
        }

        // Load current configuration
        let mut config = load_config()?;

        if let Some(hex) = &self.primary {
            config.palette.primary = parse_color(hex)?.to_hex();
        }

        if let Some(hex) = &self.secondary {
            config.palette.secondary = parse_color(hex)?.to_hex();
        }

        if let Some(name) = &self.scheme {
            config.palette.scheme = parse_scheme(name)?;
        }

        if let Some(name) = &self.format {
            config.export.format = ExportFormat::from_name(name).ok_or_else(|| {
                CliError::validation(
                    "Invalid format. Must be one of: tailwind3, tailwind4, css, scss, json",
                )
            })?;
        }

        if let Some(path) = &self.output_dir {
            config.export.output_dir = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        palette: PaletteOutput {
            primary: config.palette.primary.clone(),
            secondary: config.palette.secondary.clone(),
            scheme: config.palette.scheme.to_string(),
        },
        export: ExportOutput {
            format: config.export.format.to_string(),
            output_dir: config
                .export
                .output_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Palette:");
    println!("  Primary:   {}", config.palette.primary);
    println!("  Secondary: {}", config.palette.secondary);
    println!("  Scheme:    {}", config.palette.scheme);
    println!();

    println!("Export:");
    println!("  Format:           {}", config.export.format);
    match &config.export.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
}
