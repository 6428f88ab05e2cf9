//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use shadeforge::config::Config;
use shadeforge::constants::CONFIG_DIR_ENV;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shadeforge binary
pub fn shadeforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shadeforge")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(shadeforge_bin());
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp config directory holding `config`.
pub fn temp_config(config: &Config) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    config
        .save_to(&temp_dir.path().join("config.toml"))
        .expect("Failed to write config");
    temp_dir
}

/// Asserts a zero exit code, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}
