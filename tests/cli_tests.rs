//! End-to-end tests for the `posterwizard` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the posterwizard binary
fn posterwizard_bin() -> String {
    std::env::var("CARGO_BIN_EXE_posterwizard")
        .unwrap_or_else(|_| "target/release/posterwizard".to_string())
}

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(posterwizard_bin())
        .env("POSTERWIZARD_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// Style Command Tests
// ============================================================================

#[test]
fn test_style_dark_json() {
    let dir = TempDir::new().unwrap();
    let output = run(&["style", "--mode", "dark", "--force", "--json"], dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["enabled"], true);
    assert_eq!(result["derived"]["is_dark_mode"], true);
    assert_eq!(result["derived"]["border_color"], "#3c3c3c");
    let widgets = result["widgets"].as_array().unwrap();
    assert_eq!(widgets.len(), 7);
    assert_eq!(widgets[0]["category"], "button");
    assert!(widgets[0]["stylesheet"]
        .as_str()
        .unwrap()
        .starts_with("QPushButton {"));
}

#[test]
fn test_style_single_category_light() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &["style", "--mode", "light", "--category", "panel", "--force"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("Appearance: light"));
    assert!(text.contains("QFrame {"));
    assert!(text.contains("border-radius: 12px;"));
    assert!(!text.contains("QPushButton"));
}

#[test]
fn test_style_uses_configured_radius() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[ui]\ntheme_mode = \"Dark\"\nadaptive_styling = true\nlabel_radius = 3\n",
    )
    .unwrap();

    let output = run(&["style", "--category", "label"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Appearance: dark"));
    assert!(text.contains("border-radius: 3px;"));
}

#[test]
fn test_style_respects_disabled_gate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[ui]\nadaptive_styling = false\n",
    )
    .unwrap();

    let output = run(&["style", "--mode", "dark"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Adaptive styling is disabled"));

    let output = run(&["style", "--mode", "dark", "--json"], dir.path());
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["enabled"], false);
    assert!(result["derived"].is_null());
    assert_eq!(result["widgets"].as_array().map(Vec::len), Some(0));

    // --force overrides the gate
    let output = run(&["style", "--mode", "dark", "--force"], dir.path());
    assert!(stdout(&output).contains("Appearance: dark"));
}

#[test]
fn test_style_step_categories() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &["style", "--mode", "light", "--category", "step-stack", "--force"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("QStackedWidget#steps {"));
    assert!(text.contains("border: none;"));
}

#[test]
fn test_style_invalid_arguments() {
    let dir = TempDir::new().unwrap();
    let output = run(&["style", "--mode", "sepia"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["style", "--category", "slider"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown widget category"));
}

// ============================================================================
// Formats Command Tests
// ============================================================================

#[test]
fn test_formats_sorted() {
    let dir = TempDir::new().unwrap();
    let output = run(&["formats", "--json"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["unit"], "cm");
    let names: Vec<&str> = result["formats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"DIN A4"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "path"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let expected = dir.path().join("config.toml");
    assert_eq!(stdout(&output).trim(), expected.display().to_string());
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "init"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("config.toml").exists());

    // Second init refuses to overwrite
    let output = run(&["config", "init"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let output = run(&["config", "init", "--force"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["config", "show", "--json"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["poster"]["paper_format"], "DIN A4");
    assert_eq!(result["ui"]["panel_radius"], 12);
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[poster]\npaper_format = \"Napkin\"\nunit_of_length = \"cm\"\nlaunch_pdf_application = true\n",
    )
    .unwrap();

    let output = run(&["config", "show"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Napkin"));
}
