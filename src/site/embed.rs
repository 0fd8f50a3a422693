//! Resolves video URLs to an embeddable identifier.
//!
//! Three forms are recognized: a watch-page URL carrying a `v` query
//! parameter, the short-link form, and an already-embeddable path. Anything
//! else resolves to "no playable embed" and the caller shows a placeholder.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// A successfully resolved video embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    id: String,
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[A-Za-z0-9_-]{11}$").expect("valid regex"))
}

fn is_youtube_host(host: &str) -> bool {
    host == "youtube.com" || host.ends_with(".youtube.com")
}

impl VideoEmbed {
    /// Extracts the 11-character video identifier from a recognized URL form.
    ///
    /// Returns `None` for unparseable URLs, unrecognized hosts, and
    /// identifiers of the wrong length or alphabet.
    #[must_use]
    pub fn parse(source: &str) -> Option<Self> {
        let url = Url::parse(source).ok()?;
        let host = url.host_str()?;

        let candidate = if host == "youtu.be" {
            url.path_segments()?.next().map(String::from)
        } else if is_youtube_host(host) && url.path() == "/watch" {
            url.query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        } else if is_youtube_host(host) {
            url.path()
                .strip_prefix("/embed/")
                .map(|rest| rest.split(['?', '#', '/']).next().unwrap_or("").to_string())
        } else {
            None
        }?;

        video_id_pattern()
            .is_match(&candidate)
            .then_some(Self { id: candidate })
    }

    /// The bare 11-character identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The embeddable player URL.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1&mute=1&playsinline=1&rel=0", self.id)
    }

    /// The plain watch-page URL.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_and_watch_link_resolve_identically() {
        let short = VideoEmbed::parse("https://youtu.be/TF06nUzToNk").unwrap();
        let watch = VideoEmbed::parse("https://www.youtube.com/watch?v=TF06nUzToNk").unwrap();
        assert_eq!(short.id(), "TF06nUzToNk");
        assert_eq!(short, watch);
    }

    #[test]
    fn test_embed_form_resolves() {
        let embed = VideoEmbed::parse("https://www.youtube.com/embed/TF06nUzToNk?rel=0").unwrap();
        assert_eq!(embed.id(), "TF06nUzToNk");
    }

    #[test]
    fn test_short_link_ignores_query_and_fragment() {
        let embed = VideoEmbed::parse("https://youtu.be/TF06nUzToNk?t=42#detail").unwrap();
        assert_eq!(embed.id(), "TF06nUzToNk");
    }

    #[test]
    fn test_unrecognized_forms_resolve_to_none() {
        assert!(VideoEmbed::parse("https://example.com/video").is_none());
        assert!(VideoEmbed::parse("https://vimeo.com/12345").is_none());
        assert!(VideoEmbed::parse("not a url").is_none());
        assert!(VideoEmbed::parse("#").is_none());
    }

    #[test]
    fn test_wrong_length_identifier_rejected() {
        assert!(VideoEmbed::parse("https://youtu.be/short").is_none());
        assert!(VideoEmbed::parse("https://www.youtube.com/watch?v=waytoolongidentifier").is_none());
    }

    #[test]
    fn test_derived_urls_embed_the_identifier() {
        let embed = VideoEmbed::parse("https://youtu.be/TF06nUzToNk").unwrap();
        assert_eq!(embed.watch_url(), "https://www.youtube.com/watch?v=TF06nUzToNk");
        assert!(embed.embed_url().contains("/embed/TF06nUzToNk"));
    }
}
