//! End-to-end tests for `lazylink validate`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the lazylink binary
fn lazylink_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazylink")
}

#[test]
fn test_validate_clean_document() {
    let (path, _temp_dir) = create_temp_site_file(&test_site_basic());

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Clean document should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓") || stdout.contains("passed"),
        "Output should indicate success"
    );
}

#[test]
fn test_validate_demo_document() {
    let path = demo_site_path();

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Shipped demo should validate. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_validate_json_structure() {
    let (path, _temp_dir) = create_temp_site_file(&test_site_basic());

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert!(result["warnings"].is_array());
    assert_eq!(result["warnings"].as_array().unwrap().len(), 0);
    assert!(result["checks"].is_object());
    assert_eq!(result["checks"]["structure"], "passed");
    assert_eq!(result["checks"]["links"], "passed");
}

#[test]
fn test_validate_qr_defect_is_a_warning_not_an_error() {
    let (path, _temp_dir) = create_temp_site_file(&test_site_with_qr_defect());

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    // Permissive behavior: the page renders the link inert, so this is
    // only a warning.
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    let warnings = result["warnings"].as_array().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("show_qr")));
    assert_eq!(result["checks"]["links"], "warning");
}

#[test]
fn test_validate_strict_mode_fails_on_warnings() {
    let (path, _temp_dir) = create_temp_site_file(&test_site_with_qr_defect());

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap(), "--strict"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Warnings should fail in strict mode"
    );
}

#[test]
fn test_validate_structural_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{"version": "1.1", "meta": {}}"#).unwrap();

    let output = Command::new(lazylink_bin())
        .args(["validate", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Structural errors should exit with code 2"
    );
}

#[test]
fn test_validate_nonexistent_file() {
    let output = Command::new(lazylink_bin())
        .args(["validate", "/nonexistent/site.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent file should exit with code 2 (I/O error)"
    );
}
