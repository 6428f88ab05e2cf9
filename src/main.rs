//! Shadeforge - palette generator for design systems
//!
//! Generates 11-shade palettes from a base color, derives harmonious
//! companion colors, checks WCAG contrast, and exports the result as
//! Tailwind, CSS, SCSS, or JSON.

use clap::{Parser, Subcommand};
use shadeforge::cli::{
    CliError, ConfigArgs, ContrastArgs, ContrastGridArgs, ExitCode, ExportArgs, HarmonyArgs,
    PaletteArgs, RandomArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shadeforge - palette generator for design systems
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an 11-shade palette from a base color
    Palette(PaletteArgs),
    /// Derive harmonious companion colors
    Harmony(HarmonyArgs),
    /// Compute the WCAG contrast ratio between two colors
    Contrast(ContrastArgs),
    /// Print the contrast matrix between palettes
    ContrastGrid(ContrastGridArgs),
    /// Generate random base colors
    Random(RandomArgs),
    /// Export palettes as Tailwind, CSS, SCSS, or JSON
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Palette(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::ContrastGrid(args) => args.execute(),
            Self::Random(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout stays machine-readable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            tracing::debug!(kind = ?err.kind, "Command failed");
            eprintln!("Error: {err}");
            err.kind.into()
        }
    }
}
