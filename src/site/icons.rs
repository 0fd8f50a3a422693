//! Terminal glyphs for document icon names.

use crate::site::{IconName, SocialPlatform};

/// Glyph rendered before a link label.
///
/// Total over [`IconName`] so a document can never reference an icon the
/// renderer has no drawing for.
#[must_use]
pub const fn icon_glyph(icon: IconName) -> &'static str {
    match icon {
        IconName::Tiktok => "♪",
        IconName::Globe => "◉",
        IconName::ShoppingBag => "⛊",
        IconName::Calendar => "▦",
        IconName::Mail => "✉",
        IconName::Youtube => "▶",
        IconName::Instagram => "◈",
        IconName::X => "𝕏",
        IconName::Film => "▤",
        IconName::Book => "▥",
        IconName::Share => "↗",
        IconName::Download => "↓",
    }
}

/// Glyph for a social platform in the socials row.
#[must_use]
pub const fn social_glyph(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Youtube => "▶",
        SocialPlatform::Instagram => "◈",
        SocialPlatform::X => "𝕏",
        SocialPlatform::Tiktok => "♪",
    }
}

/// Display label for a social platform.
#[must_use]
pub const fn social_label(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Youtube => "YouTube",
        SocialPlatform::Instagram => "Instagram",
        SocialPlatform::X => "X",
        SocialPlatform::Tiktok => "TikTok",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ICONS: [IconName; 12] = [
        IconName::Tiktok,
        IconName::Globe,
        IconName::ShoppingBag,
        IconName::Calendar,
        IconName::Mail,
        IconName::Youtube,
        IconName::Instagram,
        IconName::X,
        IconName::Film,
        IconName::Book,
        IconName::Share,
        IconName::Download,
    ];

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in ALL_ICONS {
            assert!(!icon_glyph(icon).is_empty());
        }
    }

    #[test]
    fn test_social_glyphs_match_icon_glyphs() {
        // The socials row reuses the same symbols as link icons.
        assert_eq!(social_glyph(SocialPlatform::Youtube), icon_glyph(IconName::Youtube));
        assert_eq!(social_glyph(SocialPlatform::Tiktok), icon_glyph(IconName::Tiktok));
    }
}
