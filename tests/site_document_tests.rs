//! Library-level tests over full site documents.

use lazylink::dispatch::{activation_for, LinkActivation};
use lazylink::site::grouping::group_links;
use lazylink::site::SiteConfig;

mod fixtures;
use fixtures::*;

fn demo_site() -> SiteConfig {
    let content = std::fs::read_to_string(demo_site_path()).expect("demo site readable");
    SiteConfig::from_json(&content).expect("demo site parses")
}

#[test]
fn test_demo_document_round_trips() {
    let site = demo_site();

    let serialized = serde_json::to_string(&site).unwrap();
    let reparsed = SiteConfig::from_json(&serialized).unwrap();
    assert_eq!(site, reparsed);
}

#[test]
fn test_demo_document_has_no_semantic_warnings() {
    assert!(demo_site().semantic_warnings().is_empty());
}

#[test]
fn test_demo_groups_follow_priority_order() {
    let site = demo_site();
    let names: Vec<String> = group_links(&site.links)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["EXPERIENCE", "DOWNLOADS", "NETWORK", "INQUIRIES"]);
}

#[test]
fn test_grouping_preserves_every_link_once() {
    let site = demo_site();
    let groups = group_links(&site.links);

    let flattened: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.links.iter().map(|l| l.label.as_str()))
        .collect();
    assert_eq!(flattened.len(), site.links.len());

    for link in &site.links {
        assert_eq!(
            flattened.iter().filter(|l| **l == link.label).count(),
            1,
            "link {} must land in exactly one bucket",
            link.label
        );
    }
}

#[test]
fn test_demo_qr_link_dispatches_with_payload() {
    let site = demo_site();
    let qr_link = site
        .links
        .iter()
        .find(|l| l.label == "Secure Email Comms")
        .unwrap();

    assert_eq!(
        activation_for(qr_link),
        LinkActivation::OpenQr("mailto:g.dukes1@gmail.com".to_string())
    );
}

#[test]
fn test_serialized_fixture_matches_wire_format() {
    // The fixture builder and the JSON wire format must stay in sync.
    let site = test_site_basic();
    let value = serde_json::to_value(&site).unwrap();

    assert_eq!(value["meta"]["theme"]["button_shape"], "rounded");
    assert_eq!(value["links"][0]["icon"], "globe");
    assert_eq!(value["socials"][0]["platform"], "youtube");
}
