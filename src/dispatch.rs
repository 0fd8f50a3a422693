//! Link activation dispatch.
//!
//! Clicking a link resolves to exactly one tagged outcome, consumed
//! uniformly by the rendering layer. Keeping the decision in data instead
//! of side effects makes the click contract testable without a terminal.

use crate::site::{Link, LinkAction};

/// The single outcome of activating a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkActivation {
    /// Open the URL in a new browsing context
    Navigate(String),
    /// Open the QR modal with this payload
    OpenQr(String),
    /// Export the brochart card as an image
    ExportBrochart,
    /// Do nothing (disabled link, or a misconfigured action)
    NoOp,
}

/// Resolves the activation for a link.
///
/// Disabled links are excluded from the focus ring and should never reach
/// this function; if one does, it still resolves to [`LinkActivation::NoOp`].
/// A `show_qr` action with a missing or empty payload is a configuration
/// defect that degrades to a no-op rather than failing.
#[must_use]
pub fn activation_for(link: &Link) -> LinkActivation {
    if !link.enabled {
        return LinkActivation::NoOp;
    }

    match link.action {
        Some(LinkAction::ShowQr) => match link.qr_content.as_deref() {
            Some(payload) if !payload.is_empty() => LinkActivation::OpenQr(payload.to_string()),
            _ => LinkActivation::NoOp,
        },
        Some(LinkAction::DownloadBrochart) => LinkActivation::ExportBrochart,
        None => LinkActivation::Navigate(link.url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{IconName, LinkStyle};

    fn base_link() -> Link {
        Link {
            label: "Test".to_string(),
            url: "https://example.com".to_string(),
            icon: IconName::Globe,
            style: LinkStyle::Solid,
            enabled: true,
            category: None,
            action: None,
            qr_content: None,
        }
    }

    #[test]
    fn test_plain_link_navigates() {
        let link = base_link();
        assert_eq!(
            activation_for(&link),
            LinkActivation::Navigate("https://example.com".to_string())
        );
    }

    #[test]
    fn test_disabled_link_is_inert_regardless_of_action() {
        let mut link = base_link();
        link.enabled = false;
        assert_eq!(activation_for(&link), LinkActivation::NoOp);

        link.action = Some(LinkAction::ShowQr);
        link.qr_content = Some("mailto:x@y.com".to_string());
        assert_eq!(activation_for(&link), LinkActivation::NoOp);

        link.action = Some(LinkAction::DownloadBrochart);
        assert_eq!(activation_for(&link), LinkActivation::NoOp);
    }

    #[test]
    fn test_show_qr_carries_payload() {
        let mut link = base_link();
        link.action = Some(LinkAction::ShowQr);
        link.qr_content = Some("mailto:x@y.com".to_string());
        assert_eq!(
            activation_for(&link),
            LinkActivation::OpenQr("mailto:x@y.com".to_string())
        );
    }

    #[test]
    fn test_show_qr_without_payload_is_noop() {
        let mut link = base_link();
        link.action = Some(LinkAction::ShowQr);
        assert_eq!(activation_for(&link), LinkActivation::NoOp);

        link.qr_content = Some(String::new());
        assert_eq!(activation_for(&link), LinkActivation::NoOp);
    }

    #[test]
    fn test_download_brochart_triggers_export() {
        let mut link = base_link();
        link.action = Some(LinkAction::DownloadBrochart);
        link.url = "#".to_string();
        assert_eq!(activation_for(&link), LinkActivation::ExportBrochart);
    }
}
