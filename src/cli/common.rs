//! Shared CLI error types and helpers.

use crate::config::Config;
use crate::models::{ColorError, HarmonyScheme, RgbColor};
use crate::services::store::PaletteStore;
use serde::Serialize;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad color, unknown scheme, ...)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a hex color argument.
pub fn parse_color(hex: &str) -> CliResult<RgbColor> {
    Ok(RgbColor::from_hex(hex)?)
}

/// Parses a harmony scheme argument.
pub fn parse_scheme(name: &str) -> CliResult<HarmonyScheme> {
    HarmonyScheme::from_name(name).ok_or_else(|| {
        CliError::validation(format!(
            "Invalid scheme '{name}'. Must be one of: auto, complementary, analogous, triadic, split"
        ))
    })
}

/// Loads the user config, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Palette inputs shared by commands that work on a primary/secondary pair.
#[derive(Debug, Clone, Default)]
pub struct PaletteInputs<'a> {
    /// Primary hex, or the configured default
    pub primary: Option<&'a str>,
    /// Secondary hex; shows the secondary identity when given
    pub secondary: Option<&'a str>,
    /// Harmony scheme; a linked scheme shows the secondary identity
    pub scheme: Option<&'a str>,
}

impl PaletteInputs<'_> {
    /// Builds a store from the inputs, falling back to config defaults.
    ///
    /// An explicit `--secondary` wins over the harmony target only until the
    /// primary changes, so it is applied last.
    pub fn build_store(&self, config: &Config) -> CliResult<PaletteStore> {
        let primary = match self.primary {
            Some(hex) => parse_color(hex)?,
            None => config
                .palette
                .primary_color()
                .map_err(|e| CliError::validation(format!("{e:#}")))?,
        };
        let default_secondary = config
            .palette
            .secondary_color()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let scheme = match self.scheme {
            Some(name) => parse_scheme(name)?,
            None => config.palette.scheme,
        };

        let mut store = PaletteStore::new(primary, default_secondary);
        store.set_scheme(scheme);
        if self.secondary.is_some() || scheme.is_linked() {
            store.set_secondary_visible(true);
        }
        if let Some(hex) = self.secondary {
            store.set_secondary_hex(hex)?;
        }
        Ok(store)
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
