//! End-to-end tests for `shadeforge palette`.

mod fixtures;
use fixtures::*;

use regex::Regex;

// ============================================================================
// Human-readable Output
// ============================================================================

#[test]
fn test_palette_lists_eleven_shades() {
    let output = run(&["palette", "#3b82f6"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Palette for #3B82F6"));

    let row = Regex::new(r"(?m)^\s+\d{2,3}  #[0-9A-F]{6}  label: (black|white)$").unwrap();
    assert_eq!(row.find_iter(&stdout).count(), 11);
    assert!(stdout.contains("500  #3B82F6"));
}

#[test]
fn test_palette_accepts_shorthand() {
    let output = run(&["palette", "abc"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("500  #AABBCC"));
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_palette_json() {
    let output = run(&["palette", "#3b82f6", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["base"], "#3B82F6");

    let shades = result["shades"].as_array().expect("shades array");
    assert_eq!(shades.len(), 11);
    assert_eq!(shades[0]["shade"], 50);
    assert_eq!(shades[0]["hex"], "#E3EDFE");
    assert_eq!(shades[0]["label"], "black");
    assert_eq!(shades[5]["hex"], "#3B82F6");
    assert_eq!(shades[10]["shade"], 950);
    assert_eq!(shades[10]["hex"], "#020F26");
    assert_eq!(shades[10]["label"], "white");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_palette_invalid_hex() {
    let output = run(&["palette", "#12345"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hex color format '#12345'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_palette_missing_argument() {
    let output = run(&["palette"]);
    assert_ne!(output.status.code(), Some(0));
}
