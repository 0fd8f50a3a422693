//! Platform integrations: outbound navigation, clipboard, sharing.
//!
//! All of these are single best-effort attempts. Failures are returned to
//! the caller, which reports them through the status bar and logs them;
//! nothing here retries or panics.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

use crate::site::SiteConfig;

/// Opens a URL in the system browser, detached.
///
/// The spawned opener process carries no referrer and is not waited on.
pub fn open_url(url: &str) -> Result<()> {
    debug!("opening url: {url}");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    };

    command
        .spawn()
        .map(drop)
        .with_context(|| format!("Failed to open URL: {url}"))
}

/// Copies text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .context("Failed to copy to clipboard")
}

/// The text shared or copied for a page.
///
/// Terminals expose no native share sheet, so sharing means copying the
/// canonical page URL; a document without one shares its title line.
#[must_use]
pub fn share_text(site: &SiteConfig) -> String {
    match site.meta.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => site.meta.title.clone(),
    }
}

/// Copies the page's share text to the clipboard.
pub fn share_page(site: &SiteConfig) -> Result<String> {
    let text = share_text(site);
    copy_text(&text)?;
    Ok(text)
}
