//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and config locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shadeforge";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "Shadeforge";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SHADEFORGE_CONFIG_DIR";
