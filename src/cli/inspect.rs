//! Inspection command: prints the grouped link summary of a document.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::dispatch::{activation_for, LinkActivation};
use crate::site::grouping::group_links;
use crate::site::SiteConfig;

/// Inspect a site document: grouped links, socials, and card flags
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the site document (JSON)
    #[arg(value_name = "SITE")]
    pub site: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LinkSummary {
    label: String,
    activation: &'static str,
}

#[derive(Debug, Serialize)]
struct GroupSummary {
    name: String,
    links: Vec<LinkSummary>,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    title: String,
    profile: String,
    hero: bool,
    brochart: bool,
    groups: Vec<GroupSummary>,
    visible_socials: Vec<String>,
}

fn activation_name(activation: &LinkActivation) -> &'static str {
    match activation {
        LinkActivation::Navigate(_) => "navigate",
        LinkActivation::OpenQr(_) => "show_qr",
        LinkActivation::ExportBrochart => "export_brochart",
        LinkActivation::NoOp => "inert",
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let site = SiteConfig::load(&self.site)
            .map_err(|e| CliError::io(format!("Failed to load site document: {e:#}")))?;

        let groups = group_links(&site.links)
            .into_iter()
            .map(|group| GroupSummary {
                name: group.name,
                links: group
                    .links
                    .iter()
                    .map(|link| LinkSummary {
                        label: link.label.clone(),
                        activation: activation_name(&activation_for(link)),
                    })
                    .collect(),
            })
            .collect();

        let visible_socials = site
            .socials
            .iter()
            .filter(|s| s.is_visible())
            .map(|s| format!("{:?}", s.platform).to_lowercase())
            .collect();

        let response = InspectResponse {
            title: site.meta.title.clone(),
            profile: site.profile.name.clone(),
            hero: site.hero.show,
            brochart: site.brochart.show,
            groups,
            visible_socials,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{} — {}", response.title, response.profile);
            println!(
                "Hero: {} | Brochart: {}",
                if response.hero { "shown" } else { "hidden" },
                if response.brochart { "shown" } else { "hidden" }
            );

            for group in &response.groups {
                println!("\n{}", group.name);
                for link in &group.links {
                    println!("  {} [{}]", link.label, link.activation);
                }
            }

            if !response.visible_socials.is_empty() {
                println!("\nSocials: {}", response.visible_socials.join(", "));
            }
        }

        Ok(())
    }
}
