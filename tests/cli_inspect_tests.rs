//! End-to-end tests for `lazylink inspect`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the lazylink binary
fn lazylink_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazylink")
}

#[test]
fn test_inspect_group_ordering() {
    let mut site = test_site_basic();
    site.links = vec![
        test_link("net", Some("NETWORK")),
        test_link("exp", Some("EXPERIENCE")),
        test_link("other", None),
        test_link("custom", Some("CUSTOM")),
    ];
    let (path, _temp_dir) = create_temp_site_file(&site);

    let output = Command::new(lazylink_bin())
        .args(["inspect", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let names: Vec<&str> = result["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["EXPERIENCE", "NETWORK", "OTHER", "CUSTOM"]);
}

#[test]
fn test_inspect_activation_kinds() {
    let path = demo_site_path();

    let output = Command::new(lazylink_bin())
        .args(["inspect", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let all_links: Vec<&serde_json::Value> = result["groups"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|g| g["links"].as_array().unwrap())
        .collect();

    let activation_of = |label: &str| {
        all_links
            .iter()
            .find(|l| l["label"] == label)
            .unwrap_or_else(|| panic!("missing link {label}"))["activation"]
            .as_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(activation_of("Secure Email Comms"), "show_qr");
    assert_eq!(activation_of("The Brochart (Tactical JPEG)"), "export_brochart");
    assert_eq!(activation_of("IMDB Database"), "navigate");
}

#[test]
fn test_inspect_disabled_link_is_inert() {
    let mut site = test_site_basic();
    let mut disabled = test_link("off", Some("EXPERIENCE"));
    disabled.enabled = false;
    site.links.push(disabled);
    let (path, _temp_dir) = create_temp_site_file(&site);

    let output = Command::new(lazylink_bin())
        .args(["inspect", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let found = result["groups"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|g| g["links"].as_array().unwrap())
        .find(|l| l["label"] == "off")
        .expect("disabled link should still be listed");
    assert_eq!(found["activation"], "inert");
}

#[test]
fn test_inspect_human_output_mentions_groups() {
    let path = demo_site_path();

    let output = Command::new(lazylink_bin())
        .args(["inspect", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EXPERIENCE"));
    assert!(stdout.contains("BLKDMND"));
    assert!(stdout.contains("Socials:"));
}

#[test]
fn test_inspect_nonexistent_file() {
    let output = Command::new(lazylink_bin())
        .args(["inspect", "/nonexistent/site.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
