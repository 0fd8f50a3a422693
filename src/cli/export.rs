//! Export command: renders the brochart card headlessly.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::export_brochart_jpeg;
use crate::site::SiteConfig;

/// Export the brochart card of a site document as a JPEG
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the site document (JSON)
    #[arg(value_name = "SITE")]
    pub site: PathBuf,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let site = SiteConfig::load(&self.site)
            .map_err(|e| CliError::io(format!("Failed to load site document: {e:#}")))?;

        if !site.brochart.show {
            return Err(CliError::validation(
                "This document does not show a brochart; nothing to export",
            ));
        }

        let export_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => Config::load()
                .unwrap_or_default()
                .export_dir()
                .map_err(|e| CliError::io(format!("Failed to resolve export directory: {e:#}")))?,
        };

        let path = export_brochart_jpeg(&site, &export_dir)
            .map_err(|e| CliError::validation(format!("Export failed: {e:#}")))?;

        println!("✓ Exported brochart to: {}", path.display());

        Ok(())
    }
}
