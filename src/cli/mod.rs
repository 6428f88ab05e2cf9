//! CLI command handlers for Shadeforge.
//!
//! This module provides headless, scriptable access to the palette engine
//! for automation, testing, and build pipelines.

pub mod common;
pub mod config;
pub mod contrast;
pub mod export;
pub mod harmony;
pub mod palette;
pub mod random;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::{ContrastArgs, ContrastGridArgs};
pub use export::ExportArgs;
pub use harmony::HarmonyArgs;
pub use palette::PaletteArgs;
pub use random::RandomArgs;
