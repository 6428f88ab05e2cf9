//! Contrast commands: single pair ratio and the full shade grid.

use crate::cli::common::{load_config, parse_color, print_json, CliError, CliResult, PaletteInputs};
use crate::models::{RgbColor, ShadeKey};
use crate::services::contrast::{
    contrast_ratio_rgb, label_color, ContrastGrid, ContrastView, LabelColor, WcagLevel,
};
use clap::Args;
use serde::Serialize;
use std::fmt::Write as _;

/// Compute the WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// First color (#RRGGBB or #RGB)
    #[arg(value_name = "A")]
    pub first: String,

    /// Second color (#RRGGBB or #RGB)
    #[arg(value_name = "B")]
    pub second: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastOutput {
    first: RgbColor,
    second: RgbColor,
    ratio: f64,
    level: WcagLevel,
    passes_aa: bool,
    passes_aaa: bool,
    label_on_first: LabelColor,
    label_on_second: LabelColor,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let first = parse_color(&self.first)?;
        let second = parse_color(&self.second)?;
        let ratio = contrast_ratio_rgb(first, second);
        let level = WcagLevel::classify(ratio);

        let output = ContrastOutput {
            first,
            second,
            ratio,
            level,
            passes_aa: level.passes_aa(),
            passes_aaa: level.passes_aaa(),
            label_on_first: label_color(first),
            label_on_second: label_color(second),
        };

        if self.json {
            return print_json(&output);
        }

        println!("{first} vs {second}");
        println!("  Ratio: {ratio:.2}:1");
        println!("  Level: {level}");
        println!(
            "  Normal text: AA {}, AAA {}",
            pass_fail(output.passes_aa),
            pass_fail(output.passes_aaa)
        );
        Ok(())
    }
}

const fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}

/// Print the contrast matrix between two palettes
#[derive(Debug, Clone, Args)]
pub struct ContrastGridArgs {
    /// Primary base color (defaults to the configured primary)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary base color (shows the secondary identity)
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Harmony scheme linking secondary to primary
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Palettes compared as background/text: p-p, s-s, p-s, s-p
    #[arg(long, value_name = "VIEW", default_value = "p-p")]
    pub view: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GridOutput<'a> {
    view: &'static str,
    grid: &'a ContrastGrid,
}

impl ContrastGridArgs {
    /// Execute the contrast-grid command
    pub fn execute(&self) -> CliResult<()> {
        let view = ContrastView::from_name(&self.view).ok_or_else(|| {
            CliError::validation(format!(
                "Invalid view '{}'. Must be one of: p-p, s-s, p-s, s-p",
                self.view
            ))
        })?;

        let config = load_config()?;
        let store = PaletteInputs {
            primary: self.primary.as_deref(),
            secondary: self.secondary.as_deref(),
            scheme: self.scheme.as_deref(),
        }
        .build_store(&config)?;

        let grid = store.contrast_grid(view);

        if self.json {
            print_json(&GridOutput {
                view: view.as_str(),
                grid: &grid,
            })
        } else {
            print_grid(view, &grid);
            Ok(())
        }
    }
}

fn print_grid(view: ContrastView, grid: &ContrastGrid) {
    println!("Contrast grid ({}), rows are backgrounds", view.as_str());
    println!();

    let mut header = String::from("        ");
    for shade in ShadeKey::ALL {
        let _ = write!(header, "{:>7}", shade.value());
    }
    println!("{header}");

    for (shade, row) in ShadeKey::ALL.iter().zip(grid.rows()) {
        let mut line = format!("  {:>4}  ", shade.value());
        for cell in row {
            let _ = write!(line, "{:>7.2}", cell.ratio);
        }
        println!("{line}");
    }
}
