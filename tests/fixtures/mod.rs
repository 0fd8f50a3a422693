//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use lazylink::site::{
    Analytics, BrochartConfig, ButtonShape, CallToAction, Fonts, Footer, Hero, IconName, Link,
    LinkAction, LinkStyle, Meta, Operative, Profile, SiteConfig, SiteTheme, Social, SocialPlatform,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a minimal valid site document.
pub fn test_site_basic() -> SiteConfig {
    SiteConfig {
        version: "1.1".to_string(),
        meta: Meta {
            title: "Test District".to_string(),
            description: "Test landing page".to_string(),
            theme: SiteTheme {
                accent: "#EC9D34".to_string(),
                background: "#0A0A0A".to_string(),
                text: "#FFFFFF".to_string(),
                button_shape: ButtonShape::Rounded,
                elevated_cards: true,
            },
            fonts: Fonts {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
            url: Some("https://example.com/test".to_string()),
        },
        profile: Profile {
            name: "Tester".to_string(),
            tagline: "TEST • SUITE".to_string(),
            avatar_url: "https://example.com/avatar.png".to_string(),
            badge: None,
        },
        hero: Hero {
            show: true,
            headline: "THE TEST".to_string(),
            subheadline: "SUBHEAD".to_string(),
            primary_cta: CallToAction {
                label: "WATCH".to_string(),
                url: "https://youtu.be/TF06nUzToNk".to_string(),
                style: "primary".to_string(),
            },
        },
        brochart: BrochartConfig {
            show: true,
            title: "THE BROCHART".to_string(),
            version: "V.1.0 // TEST".to_string(),
            brief: "Test brief.".to_string(),
            protocol: "Test protocol.".to_string(),
            operatives: vec![
                Operative {
                    codename: "OP-01".to_string(),
                    comm_channel: "SIGINT / PHONE".to_string(),
                    image_url: None,
                },
                Operative {
                    codename: "OP-02".to_string(),
                    comm_channel: "SIGINT / IG".to_string(),
                    image_url: None,
                },
            ],
        },
        links: vec![
            test_link("First Experience", Some("EXPERIENCE")),
            test_link("Download", Some("DOWNLOADS")),
            test_link("Uncategorized", None),
        ],
        socials: vec![Social {
            platform: SocialPlatform::Youtube,
            url: "https://youtube.com/@test".to_string(),
            enabled: true,
        }],
        footer: Footer {
            text: "TEST // ALL RIGHTS RESERVED".to_string(),
            show_brandmark: false,
            brandmark_url: String::new(),
        },
        music: None,
        analytics: Analytics::default(),
    }
}

/// Creates a plain navigation link.
pub fn test_link(label: &str, category: Option<&str>) -> Link {
    Link {
        label: label.to_string(),
        url: format!("https://example.com/{}", label.replace(' ', "-")),
        icon: IconName::Globe,
        style: LinkStyle::Solid,
        enabled: true,
        category: category.map(String::from),
        action: None,
        qr_content: None,
    }
}

/// A site whose only defect is a `show_qr` link without a payload.
pub fn test_site_with_qr_defect() -> SiteConfig {
    let mut site = test_site_basic();
    site.links.push(Link {
        label: "Broken QR".to_string(),
        url: "#".to_string(),
        icon: IconName::Mail,
        style: LinkStyle::Outline,
        enabled: true,
        category: Some("INQUIRIES".to_string()),
        action: Some(LinkAction::ShowQr),
        qr_content: None,
    });
    site
}

/// A site without a brochart render target.
pub fn test_site_without_brochart() -> SiteConfig {
    let mut site = test_site_basic();
    site.brochart.show = false;
    site
}

/// Writes a site document to a temp file, returning its path and the
/// guard keeping the directory alive.
pub fn create_temp_site_file(site: &SiteConfig) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("site.json");
    let content = serde_json::to_string_pretty(site).expect("Failed to serialize site");
    fs::write(&path, content).expect("Failed to write site file");
    (path, temp_dir)
}

/// Path to the demo document shipped with the repository.
pub fn demo_site_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/site.json")
}
