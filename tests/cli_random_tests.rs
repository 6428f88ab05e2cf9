//! End-to-end tests for `shadeforge random`.

mod fixtures;
use fixtures::*;

use regex::Regex;

#[test]
fn test_random_single_color() {
    let output = run(&["random"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let hex = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(hex.is_match(lines[0]), "unexpected output: {stdout}");
}

#[test]
fn test_random_count() {
    let output = run(&["random", "--count", "8"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let hex = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.lines().all(|line| hex.is_match(line)));
}

#[test]
fn test_random_seed_is_reproducible() {
    let first = run(&["random", "-n", "5", "--seed", "42", "--json"]);
    let second = run(&["random", "-n", "5", "--seed", "42", "--json"]);
    assert_success(&first);

    let colors = stdout_json(&first);
    assert_eq!(colors.as_array().unwrap().len(), 5);
    assert_eq!(colors, stdout_json(&second));
}

#[test]
fn test_random_zero_count_rejected() {
    let output = run(&["random", "--count", "0"]);
    assert_eq!(output.status.code(), Some(1));
}
