//! Harmony command: derive a companion color from a base color.

use crate::cli::common::{parse_color, parse_scheme, print_json, CliResult};
use crate::models::{HarmonyScheme, Palette, RgbColor};
use crate::services::harmony::{all_harmonies, rotate};
use crate::services::palette::interpolate;
use clap::Args;
use serde::Serialize;

/// Derive harmonious companion colors
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color (#RRGGBB or #RGB)
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Harmony scheme (auto, complementary, analogous, triadic, split).
    /// Lists every scheme when omitted.
    #[arg(short, long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Also print the companion's palette
    #[arg(long)]
    pub palette: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HarmonyOutput {
    scheme: HarmonyScheme,
    companion: RgbColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<Palette>,
}

#[derive(Debug, Serialize)]
struct HarmonyReport {
    base: RgbColor,
    harmonies: Vec<HarmonyOutput>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.color)?;

        let pairs = match &self.scheme {
            Some(name) => {
                let scheme = parse_scheme(name)?;
                vec![(scheme, rotate(base, scheme))]
            }
            None => all_harmonies(base),
        };

        let report = HarmonyReport {
            base,
            harmonies: pairs
                .into_iter()
                .map(|(scheme, companion)| HarmonyOutput {
                    scheme,
                    companion,
                    palette: self.palette.then(|| interpolate(companion)),
                })
                .collect(),
        };

        if self.json {
            print_json(&report)
        } else {
            print_report(&report);
            Ok(())
        }
    }
}

fn print_report(report: &HarmonyReport) {
    println!("Harmonies for {}", report.base);
    for harmony in &report.harmonies {
        println!();
        println!("  {:<14} {}", harmony.scheme.as_str(), harmony.companion);
        if let Some(palette) = &harmony.palette {
            for (shade, color) in palette.iter() {
                println!("    {:>3}  {color}", shade.value());
            }
        }
    }
}
