//! Integration tests for the citytour CLI

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn citytour(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_citytour"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn citytour_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_citytour"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn citytour");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");
    child.wait_with_output().expect("Failed to wait for citytour")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = citytour(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("citytour"));
    assert!(stdout.contains("Browse Boston's museums"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_categories_command() {
    let output = citytour(&["categories"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Choose a Category"));
    assert!(stdout.contains("Restaurants"));
}

#[test]
fn test_list_command() {
    let output = citytour(&["list", "museums"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 4 museums"));
    assert!(stdout.contains("1. MIT Museum"));
}

#[test]
fn test_list_unknown_category_fails() {
    let output = citytour(&["list", "zoos"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category 'zoos'"));
}

#[test]
fn test_show_command() {
    let output = citytour(&["show", "Restaurants", "11"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Oleana"));
    assert!(stdout.contains("134 Hampshire St"));
}

/// A missing location is not an error, it renders the placeholder
#[test]
fn test_show_missing_location() {
    let output = citytour(&["show", "Museums", "99"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Location not found"));
}

#[test]
fn test_interactive_tour() {
    let output = citytour_with_input(&["tour"], "start\n3\n4\nhome\nquit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Boston"));
    assert!(stdout.contains("Found 4 restaurants"));
    assert!(stdout.contains("Toro"));
    assert!(stdout.contains("1704 Washington St"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_tour_is_default_command() {
    let output = citytour_with_input(&[], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Boston City Tour"));
}

#[test]
fn test_invalid_log_level_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_citytour"))
        .arg("categories")
        .env("CITYTOUR_LOGGING__LEVEL", "chatty")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level"));
}
